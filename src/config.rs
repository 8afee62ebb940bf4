//! Runtime configuration and default file locations

use crate::report::OutputFormat;
use std::path::PathBuf;
use std::time::Duration;

/// File name of the card catalog shipped alongside the binary
pub const CATALOG_FILE_NAME: &str = "card_data.json";

/// File name of the saved profile URL
pub const PROFILE_FILE_NAME: &str = "user_profile.txt";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a single matching run
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub catalog_path: PathBuf,
    pub profile_path: PathBuf,
    pub timeout: Duration,
    pub format: OutputFormat,
    /// Persist the user's profile URL after a successful match
    pub save_profile: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            profile_path: default_profile_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            format: OutputFormat::default(),
            save_profile: true,
        }
    }
}

/// Returns the default catalog path: `card_data.json` next to the executable,
/// or in the working directory if the executable's location is unknown
pub fn default_catalog_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CATALOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CATALOG_FILE_NAME))
}

/// Returns the default saved-profile path: ~/.local/share/ptcgp_trade_matcher/user_profile.txt
pub fn default_profile_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ptcgp_trade_matcher")
        .join(PROFILE_FILE_NAME)
}
