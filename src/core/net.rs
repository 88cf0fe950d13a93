// src/core/net.rs

use std::{thread, time::Duration};

use log::warn;

use crate::config::consts::{FETCH_ATTEMPTS, FETCH_BACKOFF_MS, FETCH_TIMEOUT_SECS, USER_AGENT};

/// Page-fetching seam. The collection loop only ever sees `Some(body)` or
/// `None`; retries and failure detail stay behind this trait, and tests
/// substitute an in-memory map.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<String>;
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl Fetch for Fetcher {
    /// GET with bounded retries and exponential backoff. Exhaustion reads as
    /// `None`; the caller decides what a missing page means.
    fn fetch(&self, url: &str) -> Option<String> {
        for attempt in 0..FETCH_ATTEMPTS {
            match self.get(url) {
                Ok(body) => return Some(body),
                Err(e) => {
                    warn!("fetch {}/{} failed for {url}: {e}", attempt + 1, FETCH_ATTEMPTS);
                    if attempt + 1 < FETCH_ATTEMPTS {
                        thread::sleep(Duration::from_millis(FETCH_BACKOFF_MS * 2u64.pow(attempt)));
                    }
                }
            }
        }
        None
    }
}
