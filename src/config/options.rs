// src/config/options.rs

use std::path::PathBuf;

use super::consts::{DEFAULT_CSV_FILE, DEFAULT_IDS_FILE, DEFAULT_JSON_FILE, DEFAULT_OUT_DIR};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// File with one leaderboard user id per line.
    pub ids_file: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { ids_file: PathBuf::from(DEFAULT_IDS_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub csv: bool,
    pub json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv: true,
            json: true,
        }
    }
}

impl ExportOptions {
    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(DEFAULT_CSV_FILE)
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(DEFAULT_JSON_FILE)
    }
}
