// src/specs/scorecard.rs
//! Spec for a single scorecard page.
//!
//! Markup varies between game variants and capture years, so everything here
//! is best-effort: a missing section leaves its fields absent and never fails
//! the page. An error page without the scorecard table is a valid outcome
//! and produces a record with empty hole/score data.

use crate::core::dom::{Document, Node};
use crate::records::{PlayerLine, Scorecard};

const GAME_HEADING: &str = "h1";
const PROFILE_BUTTON: &str = r#"a[href*="/Profile/"] .btn-info"#;
const SCORECARD_TABLE: &str = "table.scorecard";
const HEADER_CELLS: &str = "thead th";
const BODY_ROWS: &str = "tbody tr";
const ROW_CELLS: &str = "th, td";
const CARD_PANELS: &str = "div.card";
const CARD_HEADER: &str = ".card-header";
const CARD_FRAME: &str = "iframe";
const EMBED_MARKER: &str = "/embed/";
const WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Parse one scorecard page into a record. Always returns; `entry_url` is
/// the only guaranteed field.
pub fn parse_scorecard(page: &str, entry_url: &str) -> Scorecard {
    let doc = Document::parse(page);
    let mut card = Scorecard { entry_url: s!(entry_url), ..Scorecard::default() };

    card.game = doc
        .find_first(GAME_HEADING)
        .map(|h| h.text())
        .filter(|t| !t.is_empty());
    card.username = doc
        .find_first(PROFILE_BUTTON)
        .map(|b| b.text())
        .filter(|t| !t.is_empty());

    if let Some(table) = doc.find_first(SCORECARD_TABLE) {
        card.hole_labels = table.find_all(HEADER_CELLS).iter().map(Node::text).collect();
        for row in table.find_all(BODY_ROWS) {
            classify_row(&row, &mut card);
        }
    }

    // Summary fields come from player 1's row only.
    if let Some(player_one) = card.players.first() {
        let (total, vs_par, gsp) = player_one.summary_tail();
        card.total_score = total;
        card.score_vs_par = vs_par;
        card.gsp = gsp;
    }

    let (video, embed) = extract_video(&doc);
    card.youtube_video = video;
    card.youtube_embed = embed;

    card
}

/// Route one table row by its first cell's label. Unknown labels and
/// cell-less rows are ignored.
fn classify_row(row: &Node, card: &mut Scorecard) {
    let cells = row.find_all(ROW_CELLS);
    let Some(first) = cells.first() else { return };
    let label = first.text();
    let rest = || cells[1..].iter().map(Node::text).collect::<Vec<_>>();
    let second = || cells.get(1).map(Node::text);

    match label.to_ascii_uppercase().as_str() {
        "DISTANCE" => card.distances = rest(),
        "PAR" => card.pars = rest(),
        "COURSE:" => {
            if let Some(course) = second() {
                card.course = Some(course);
            }
        }
        "DATE:" => {
            if let Some(date) = second() {
                card.date = Some(date);
            }
        }
        "CAPTURE ID:" => {
            if let Some(id) = second() {
                card.capture_id = Some(id);
            }
        }
        upper if upper.starts_with("PLAYER") => card.players.push(PlayerLine {
            // "Player 2" -> "2"
            player_number: label.split_whitespace().nth(1).unwrap_or_default().to_string(),
            scores: rest(),
        }),
        _ => {}
    }
}

/// First "card" panel whose header mentions Video. An embed-style frame src
/// yields the canonical watch URL alongside the original embed URL; any
/// other src is kept raw with no embed field.
fn extract_video(doc: &Document) -> (Option<String>, Option<String>) {
    for panel in doc.find_all(CARD_PANELS) {
        let Some(header) = panel.find_first(CARD_HEADER) else { continue };
        if !header.text().contains("Video") {
            continue;
        }
        let Some(src) = panel.find_first(CARD_FRAME).and_then(|f| f.attr("src")) else {
            continue;
        };
        if let Some(at) = src.find(EMBED_MARKER) {
            let tail = &src[at + EMBED_MARKER.len()..];
            let id = tail.split('?').next().unwrap_or_default();
            return (Some(join!(WATCH_PREFIX, id)), Some(s!(src)));
        }
        return (Some(s!(src)), None);
    }
    (None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.goldenteescores.com/Highscore/ScorecardDetails?captureId=88123";

    fn table_page(body_rows: &str) -> String {
        format!(
            r#"<html><body>
                 <h1>Golden Tee Unplugged</h1>
                 <table class="scorecard">
                   <thead><tr>
                     <th>Hole</th><th>1</th><th>2</th><th>3</th><th>OUT</th><th>TOT</th><th>+/-</th><th>GSP</th>
                   </tr></thead>
                   <tbody>{body_rows}</tbody>
                 </table>
               </body></html>"#
        )
    }

    #[test]
    fn pages_without_the_table_yield_a_partial_record() {
        let card = parse_scorecard("<html><body><h1>Not Found</h1></body></html>", URL);
        assert_eq!(card.entry_url, URL);
        assert_eq!(card.game.as_deref(), Some("Not Found"));
        assert!(card.hole_labels.is_empty());
        assert!(card.distances.is_empty());
        assert!(card.pars.is_empty());
        assert!(card.players.is_empty());
        assert!(card.total_score.is_none());
    }

    #[test]
    fn classifies_distance_par_and_players() {
        let page = table_page(
            r#"<tr><td>Distance</td><td>342</td><td>515</td><td>178</td></tr>
               <tr><td>Par</td><td>4</td><td>5</td><td>3</td></tr>
               <tr><td>Player 1</td><td>4</td><td>4</td><td>3</td><td>11</td><td>11</td><td>-1</td><td>342</td></tr>
               <tr><td>Player 2</td><td>5</td><td>5</td><td>4</td><td>14</td><td>14</td><td>+2</td><td>201</td></tr>"#,
        );
        let card = parse_scorecard(&page, URL);
        assert_eq!(
            card.hole_labels,
            vec!["Hole", "1", "2", "3", "OUT", "TOT", "+/-", "GSP"]
        );
        assert_eq!(card.distances, vec!["342", "515", "178"]);
        assert_eq!(card.pars, vec!["4", "5", "3"]);
        assert_eq!(card.players.len(), 2);
        assert_eq!(card.players[0].player_number, "1");
        assert_eq!(card.players[1].player_number, "2");
        assert_eq!(card.players[1].scores[0], "5");

        // Summary tail comes from player 1 only.
        assert_eq!(card.total_score.as_deref(), Some("11"));
        assert_eq!(card.score_vs_par.as_deref(), Some("-1"));
        assert_eq!(card.gsp.as_deref(), Some("342"));
    }

    #[test]
    fn metadata_rows_and_unknown_labels() {
        let page = table_page(
            r#"<tr><td>Course:</td><td>Eagle Crest</td></tr>
               <tr><td>Date:</td><td>3/14/2016</td></tr>
               <tr><td>Capture ID:</td><td>88123</td></tr>
               <tr><td>Weather:</td><td>Breezy</td></tr>
               <tr></tr>
               <tr><td>Course:</td></tr>"#,
        );
        let card = parse_scorecard(&page, URL);
        assert_eq!(card.course.as_deref(), Some("Eagle Crest"));
        assert_eq!(card.date.as_deref(), Some("3/14/2016"));
        assert_eq!(card.capture_id.as_deref(), Some("88123"));
        // Unknown labels, empty rows and a second Course: row with no value
        // cell leave everything else untouched.
        assert!(card.players.is_empty());
    }

    #[test]
    fn short_player_rows_have_partial_summaries() {
        let page = table_page(r#"<tr><td>Player 1</td><td>4</td><td>3</td></tr>"#);
        let card = parse_scorecard(&page, URL);
        assert!(card.total_score.is_none());
        assert!(card.score_vs_par.is_none());
        assert_eq!(card.gsp.as_deref(), Some("3"));
    }

    #[test]
    fn username_needs_both_the_profile_link_and_the_button() {
        let page = r#"
            <h1>Power Putt</h1>
            <a href="/Profile/PuttMaster"><span class="btn btn-info">PuttMaster</span></a>
        "#;
        assert_eq!(parse_scorecard(page, URL).username.as_deref(), Some("PuttMaster"));

        let no_button = r#"<a href="/Profile/PuttMaster">PuttMaster</a>"#;
        assert!(parse_scorecard(no_button, URL).username.is_none());

        let no_profile = r#"<a href="/Help"><span class="btn-info">nope</span></a>"#;
        assert!(parse_scorecard(no_profile, URL).username.is_none());
    }

    #[test]
    fn embed_video_gets_a_watch_url() {
        let page = r#"
            <div class="card">
              <div class="card-header">Round Video</div>
              <iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"></iframe>
            </div>
        "#;
        let card = parse_scorecard(page, URL);
        assert_eq!(
            card.youtube_video.as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        assert_eq!(
            card.youtube_embed.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0")
        );
    }

    #[test]
    fn non_embed_video_is_kept_raw() {
        let page = r#"
            <div class="card">
              <div class="card-header">Video</div>
              <iframe src="https://player.example.net/v/123"></iframe>
            </div>
        "#;
        let card = parse_scorecard(page, URL);
        assert_eq!(card.youtube_video.as_deref(), Some("https://player.example.net/v/123"));
        assert!(card.youtube_embed.is_none());
    }

    #[test]
    fn cards_without_video_headers_are_ignored() {
        let page = r#"
            <div class="card"><div class="card-header">Stats</div>
              <iframe src="https://www.youtube.com/embed/zzz"></iframe></div>
        "#;
        let card = parse_scorecard(page, URL);
        assert!(card.youtube_video.is_none());
        assert!(card.youtube_embed.is_none());
    }
}
