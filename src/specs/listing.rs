// src/specs/listing.rs
//! Spec for a user's highscore listing page: scorecard-detail links plus a
//! best-effort game name from the surrounding row.

use crate::config::consts::{GAME_FAMILY_MARKERS, SCORECARD_LINK_MARKER, SITE_ORIGIN};
use crate::core::dom::{Document, Node};
use crate::records::EntryReference;

/// Scan a listing page for scorecard links, in document order. Duplicate
/// URLs are kept (dedup is a caller concern); an empty or foreign document
/// yields an empty vec.
pub fn extract_entries(page: &str) -> Vec<EntryReference> {
    let doc = Document::parse(page);
    let mut out = Vec::new();

    for link in doc.find_all("a[href]") {
        let Some(href) = link.attr("href") else { continue };
        if !href.to_ascii_lowercase().contains(SCORECARD_LINK_MARKER) {
            continue;
        }
        out.push(EntryReference {
            url: absolutize(href),
            game_hint: game_hint(&link),
        });
    }

    out
}

/// Prefix the site origin unless the link already carries a scheme.
fn absolutize(href: &str) -> String {
    let lc = href.to_ascii_lowercase();
    if lc.starts_with("http://") || lc.starts_with("https://") {
        s!(href)
    } else {
        join!(SITE_ORIGIN, href)
    }
}

/// The closest enclosing row cell naming a family game wins; otherwise fall
/// back to the link's own visible text.
fn game_hint(link: &Node) -> Option<String> {
    if let Some(row) = link.closest("tr") {
        for cell in row.find_all("td") {
            let text = cell.text();
            let lc = text.to_ascii_lowercase();
            if GAME_FAMILY_MARKERS.iter().any(|m| lc.contains(m)) {
                return Some(text);
            }
        }
    }
    let own = link.text();
    (!own.is_empty()).then_some(own)
}
