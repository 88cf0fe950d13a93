// src/records.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A scorecard link discovered on a user's listing page. Consumed exactly
/// once by the collection loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryReference {
    pub url: String,
    /// Best-effort game name from the listing row. The scorecard page's own
    /// heading supersedes it when present.
    pub game_hint: Option<String>,
}

/// One player's row from the scorecard table, in source order. Player 1 is
/// conventionally first and supplies the record's summary fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub player_number: String,
    pub scores: Vec<String>,
}

impl PlayerLine {
    /// `(total, vs_par, gsp)` read from the tail of the score row, assuming
    /// the site's fixed `[.., OUT, IN, TOT, +/-, GSP]` trailing layout.
    /// Purely positional and never validated against the header row: if the
    /// site reorders or drops trailing columns this reads the wrong cells
    /// rather than failing.
    pub fn summary_tail(&self) -> (Option<String>, Option<String>, Option<String>) {
        let n = self.scores.len();
        let total = (n > 3).then(|| self.scores[n - 3].clone());
        let vs_par = (n > 2).then(|| self.scores[n - 2].clone());
        let gsp = self.scores.last().cloned();
        (total, vs_par, gsp)
    }
}

/// Normalized result of parsing one scorecard page. `entry_url` is the only
/// guaranteed field; everything else is best-effort and stays `None`/empty
/// when the page lacks the section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub entry_url: String,
    pub game: Option<String>,
    pub username: Option<String>,
    pub course: Option<String>,
    pub date: Option<String>,
    pub capture_id: Option<String>,
    /// Header-row cell texts in physical column order, label column included.
    pub hole_labels: Vec<String>,
    pub distances: Vec<String>,
    pub pars: Vec<String>,
    pub players: Vec<PlayerLine>,
    pub total_score: Option<String>,
    pub score_vs_par: Option<String>,
    pub gsp: Option<String>,
    pub youtube_video: Option<String>,
    pub youtube_embed: Option<String>,
    /// Assigned by the collector at parse time, not by the parser.
    pub scraped_at: Option<DateTime<Utc>>,
    /// The id this entry was discovered under; assigned by the collector.
    pub query_user_id: Option<String>,
}
