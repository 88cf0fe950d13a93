// src/flatten.rs
//! Reshapes scorecards into flat export rows with dynamic per-hole columns.
//! Pure data transforms; file I/O lives in `file`.

use std::collections::BTreeMap;

use crate::records::Scorecard;

/// One export row. Absent fields are simply missing keys; the CSV writer
/// fills blanks against `column_order`.
pub type FlatRow = BTreeMap<String, String>;

/// Scalar columns, in export order, ahead of the synthesized hole columns.
pub const STANDARD_COLUMNS: [&str; 13] = [
    "entry_url",
    "query_user_id",
    "scraped_at",
    "game",
    "username",
    "course",
    "date",
    "capture_id",
    "total_score",
    "score_vs_par",
    "gsp",
    "youtube_video",
    "youtube_embed",
];

/// One flat row per scorecard, in input order.
pub fn flatten(cards: &[Scorecard]) -> Vec<FlatRow> {
    cards.iter().map(flatten_one).collect()
}

fn flatten_one(card: &Scorecard) -> FlatRow {
    let mut row = FlatRow::new();
    row.insert(s!("entry_url"), card.entry_url.clone());
    insert_opt(&mut row, "query_user_id", card.query_user_id.clone());
    insert_opt(&mut row, "scraped_at", card.scraped_at.map(|t| t.to_rfc3339()));
    insert_opt(&mut row, "game", card.game.clone());
    insert_opt(&mut row, "username", card.username.clone());
    insert_opt(&mut row, "course", card.course.clone());
    insert_opt(&mut row, "date", card.date.clone());
    insert_opt(&mut row, "capture_id", card.capture_id.clone());
    insert_opt(&mut row, "total_score", card.total_score.clone());
    insert_opt(&mut row, "score_vs_par", card.score_vs_par.clone());
    insert_opt(&mut row, "gsp", card.gsp.clone());
    insert_opt(&mut row, "youtube_video", card.youtube_video.clone());
    insert_opt(&mut row, "youtube_embed", card.youtube_embed.clone());

    if let Some(player_one) = card.players.first() {
        for (n, score) in align_holes(&card.hole_labels, &player_one.scores) {
            row.insert(format!("hole_{n}"), score);
        }
    }

    row
}

fn insert_opt(row: &mut FlatRow, key: &str, value: Option<String>) {
    if let Some(v) = value {
        row.insert(s!(key), v);
    }
}

/// Walk header labels and a score row in lockstep; label 0 is the row-name
/// column and carries no data. Digit-only labels emit `(running_index,
/// score)`; aggregate labels (OUT, IN, TOT, ...) consume their score but
/// emit nothing. The running index, not the label's own value, names the
/// column, which keeps 9- and 18-hole cards aligned on the same column set.
/// Scores beyond the header's extent are dropped.
pub fn align_holes(labels: &[String], scores: &[String]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut hole = 0usize;
    for (label, score) in labels.iter().skip(1).zip(scores) {
        if !label.is_empty() && label.chars().all(|c| c.is_ascii_digit()) {
            hole += 1;
            out.push((hole, score.clone()));
        }
    }
    out
}

/// Standard columns first, then every `hole_<n>` present across `rows`,
/// ascending by `n`. Union semantics let 9- and 18-hole rows share one
/// export; rows missing a column are written blank.
pub fn column_order(rows: &[FlatRow]) -> Vec<String> {
    let mut holes: Vec<usize> = rows
        .iter()
        .flat_map(|row| row.keys())
        .filter_map(|key| key.strip_prefix("hole_").and_then(|n| n.parse().ok()))
        .collect();
    holes.sort_unstable();
    holes.dedup();

    STANDARD_COLUMNS
        .iter()
        .map(|c| s!(*c))
        .chain(holes.into_iter().map(|n| format!("hole_{n}")))
        .collect()
}
