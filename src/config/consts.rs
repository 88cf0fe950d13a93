// src/config/consts.rs

// Net config
pub const SITE_ORIGIN: &str = "https://www.goldenteescores.com";
pub const LISTING_PATH: &str = "/Highscore/UserSpecific?queryId=";
pub const USER_AGENT: &str = concat!("gt_scrape/", env!("CARGO_PKG_VERSION"));
pub const FETCH_ATTEMPTS: u32 = 3;
pub const FETCH_BACKOFF_MS: u64 = 500;
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Link markers (matched against lower-cased hrefs/srcs)
pub const SCORECARD_LINK_MARKER: &str = "/highscore/scorecarddetails";

// Game family
//
// TARGET_GAMES is the allow-list for the final output: a game name passes if
// it contains one of these, case-insensitively. Supporting another variant
// means adding its title here.
pub const TARGET_GAMES: [&str; 3] = [
    "golden tee unplugged",
    "golden tee complete",
    "power putt",
];

// Listing rows mention the family by these names; used for the game hint only.
pub const GAME_FAMILY_MARKERS: [&str; 2] = ["golden tee", "power putt"];

// Pacing
pub const ENTRY_PAUSE_MS: u64 = 250; // be polite
pub const USER_PAUSE_MS: u64 = 1000;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CSV_FILE: &str = "scorecards.csv";
pub const DEFAULT_JSON_FILE: &str = "scorecards.json";
pub const DEFAULT_IDS_FILE: &str = "user_ids.txt";
