// src/main.rs

use clap::Parser;

use gt_scrape::cli::{self, Cli};

fn main() {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
