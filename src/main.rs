//! PTCGP Trade Matcher
//!
//! Compares two profile pages and prints the cards each player can trade to the other.

use clap::Parser;
use ptcgp_trade_matcher::{
    config::{self, MatcherConfig},
    report, run_match, CardIndex, HttpFetcher, MatchError, OutputFormat, ProfileStore,
};
use std::path::PathBuf;
use std::time::Duration;

/// Find mutual trades between two Pokemon TCG Pocket profiles
#[derive(Parser, Debug)]
#[command(name = "ptcgp_trade_matcher")]
#[command(version, about, long_about = None)]
struct Args {
    /// Your profile URL (defaults to the one saved by the last successful run)
    #[arg(short, long)]
    mine: Option<String>,

    /// The other player's profile URL
    #[arg(short, long)]
    theirs: Option<String>,

    /// Path to the card catalog JSON file
    #[arg(short, long, default_value_os_t = config::default_catalog_path())]
    catalog: PathBuf,

    /// Where your profile URL is remembered between runs
    #[arg(long, default_value_os_t = config::default_profile_path())]
    profile_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Don't remember your profile URL after matching
    #[arg(long, default_value_t = false)]
    no_save: bool,
}

impl Args {
    fn config(&self) -> MatcherConfig {
        MatcherConfig {
            catalog_path: self.catalog.clone(),
            profile_path: self.profile_file.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            format: self.format,
            save_profile: !self.no_save,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=ptcgp_trade_matcher=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let store = ProfileStore::new(&config.profile_path);
    let my_url = args.mine.clone().or_else(|| store.load());

    let index = CardIndex::load(&config.catalog_path);

    let fetcher = match HttpFetcher::new(config.timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let result = run_match(&fetcher, &index, my_url.as_deref(), args.theirs.as_deref()).await;
    let matches = match result {
        Ok(matches) => matches,
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    };

    match report::render(&matches, config.format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::error!("Failed to render results: {}", e);
            std::process::exit(1);
        }
    }

    if config.save_profile {
        if let Some(url) = my_url.as_deref() {
            if let Err(e) = store.save(url) {
                log::warn!("Failed to save profile URL: {}", e);
            }
        }
    }
}

fn report_failure(err: &MatchError) {
    log::error!("Matching failed: {}", err);
    if err.is_retrieval_failure() {
        eprintln!("Error: Could not retrieve all card lists. {}", err);
    } else {
        eprintln!("Error: {}", err);
    }
}
