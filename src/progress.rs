// src/progress.rs

/// Lightweight progress reporting for the long-running scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of user ids to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one scorecard has been parsed and kept.
    fn item_done(&mut self, _entry_url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
