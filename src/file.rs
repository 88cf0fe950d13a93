// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::flatten::FlatRow;
use crate::records::Scorecard;

/// One user id per line; blank lines and `#` comments are ignored.
pub fn load_user_ids(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read ids file {}: {e}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Tabular export: header row, then one row per scorecard. Cells are written
/// as strings untouched; rows missing a column get a blank.
pub fn write_csv(
    path: &Path,
    columns: &[String],
    rows: &[FlatRow],
) -> Result<PathBuf, Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(
            columns
                .iter()
                .map(|col| row.get(col).map(String::as_str).unwrap_or("")),
        )?;
    }
    writer.flush()?;
    Ok(path.to_path_buf())
}

/// Document export: the full nested records, pretty-printed.
pub fn write_json(path: &Path, cards: &[Scorecard]) -> Result<PathBuf, Box<dyn Error>> {
    let text = serde_json::to_string_pretty(cards)?;
    fs::write(path, text)?;
    Ok(path.to_path_buf())
}
