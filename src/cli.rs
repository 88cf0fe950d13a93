// src/cli.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_IDS_FILE, DEFAULT_OUT_DIR};
use crate::config::options::{ExportOptions, Params, ScrapeOptions};
use crate::progress::Progress;
use crate::runner;

/// Scrape Golden Tee family scorecards into CSV and JSON exports.
#[derive(Parser, Debug)]
#[command(name = "gt_scrape", version, about)]
pub struct Cli {
    /// File with one leaderboard user id per line ('#' starts a comment).
    #[arg(short, long, default_value = DEFAULT_IDS_FILE)]
    pub ids_file: PathBuf,

    /// Output directory for the export files.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Skip the flattened CSV export.
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the nested JSON export.
    #[arg(long)]
    pub no_json: bool,

    /// Suppress per-entry console output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_params(&self) -> Params {
        Params {
            scrape: ScrapeOptions { ids_file: self.ids_file.clone() },
            export: ExportOptions {
                out_dir: self.out.clone(),
                csv: !self.no_csv,
                json: !self.no_json,
            },
        }
    }
}

/// Console progress sink: plain line-per-event output.
#[derive(Default)]
pub struct ConsoleProgress {
    kept: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Scraping {total} user(s)...");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, entry_url: &str) {
        self.kept += 1;
        println!("  [{}] {entry_url}", self.kept);
    }

    fn finish(&mut self) {
        println!("Done: {} scorecard(s) kept.", self.kept);
    }
}

pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let params = cli.to_params();
    let summary = if cli.quiet {
        runner::run(&params, None)?
    } else {
        let mut progress = ConsoleProgress::default();
        runner::run(&params, Some(&mut progress))?
    };

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
