// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use log::info;

use crate::config::options::Params;
use crate::core::net::Fetcher;
use crate::file::{ensure_directory, load_user_ids, write_csv, write_json};
use crate::flatten;
use crate::progress::Progress;
use crate::scrape;

/// Summary of what a run produced.
pub struct RunSummary {
    pub scorecards: usize,
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    fn empty() -> Self {
        Self { scorecards: 0, files_written: Vec::new() }
    }
}

/// Top-level run: load ids, collect, flatten, export. An empty id list or an
/// empty result set is reported, not an error, and writes nothing.
pub fn run(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let ids = load_user_ids(&params.scrape.ids_file)?;
    if ids.is_empty() {
        info!("no user ids in {}", params.scrape.ids_file.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log("No user ids to process.");
        }
        return Ok(RunSummary::empty());
    }

    let fetcher = Fetcher::new()?;
    let cards = scrape::collect(&fetcher, &ids, progress.as_deref_mut());
    if cards.is_empty() {
        info!("no matching scorecards found");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No matching scorecards found.");
        }
        return Ok(RunSummary::empty());
    }

    ensure_directory(&params.export.out_dir)?;
    let mut written = Vec::new();

    if params.export.csv {
        let rows = flatten::flatten(&cards);
        let columns = flatten::column_order(&rows);
        written.push(write_csv(&params.export.csv_path(), &columns, &rows)?);
    }
    if params.export.json {
        written.push(write_json(&params.export.json_path(), &cards)?);
    }

    info!("wrote {} scorecards to {} file(s)", cards.len(), written.len());
    Ok(RunSummary { scorecards: cards.len(), files_written: written })
}
