// src/scrape.rs
//! Collection loop: listing page -> entry links -> scorecards. Strictly
//! sequential, one fetch in flight at a time, with politeness pauses after
//! each entry and between users. Results accumulate through a fold; nothing
//! here mutates shared state.

use std::{thread, time::Duration};

use chrono::Utc;
use log::{debug, info, warn};

use crate::config::consts::{ENTRY_PAUSE_MS, LISTING_PATH, SITE_ORIGIN, USER_PAUSE_MS};
use crate::core::net::Fetch;
use crate::games::is_target_game;
use crate::progress::Progress;
use crate::records::Scorecard;
use crate::specs::{listing, scorecard};

pub fn listing_url(user_id: &str) -> String {
    join!(SITE_ORIGIN, LISTING_PATH, user_id)
}

/// Collect every filter-passing scorecard for `user_ids`, in order.
pub fn collect(
    fetcher: &dyn Fetch,
    user_ids: &[String],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Scorecard> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(user_ids.len());
    }

    let cards = user_ids
        .iter()
        .enumerate()
        .fold(Vec::new(), |mut acc, (i, user_id)| {
            if i > 0 {
                thread::sleep(Duration::from_millis(USER_PAUSE_MS));
            }
            acc.extend(collect_user(fetcher, user_id, progress.as_deref_mut()));
            acc
        });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    cards
}

/// One user's contribution. A dead listing page costs only this user; a dead
/// entry page costs only that entry.
pub fn collect_user(
    fetcher: &dyn Fetch,
    user_id: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Scorecard> {
    let url = listing_url(user_id);
    let Some(page) = fetcher.fetch(&url) else {
        warn!("listing fetch failed for user {user_id}; skipping");
        return Vec::new();
    };

    let entries = listing::extract_entries(&page);
    info!("user {user_id}: {} candidate entries", entries.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("User {user_id}: {} entries", entries.len()));
    }

    entries.into_iter().fold(Vec::new(), |mut acc, entry| {
        let Some(page) = fetcher.fetch(&entry.url) else {
            warn!("entry fetch failed, dropping {}", entry.url);
            return acc;
        };

        let mut card = scorecard::parse_scorecard(&page, &entry.url);
        card.scraped_at = Some(Utc::now());
        card.query_user_id = Some(s!(user_id));
        // The page's own heading wins; the listing hint only fills a gap.
        if card.game.is_none() {
            card.game = entry.game_hint;
        }

        if card.game.as_deref().is_some_and(is_target_game) {
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&card.entry_url);
            }
            acc.push(card);
        } else {
            debug!("filtered out {:?} from {}", card.game, card.entry_url);
        }

        thread::sleep(Duration::from_millis(ENTRY_PAUSE_MS));
        acc
    })
}
