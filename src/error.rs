//! Error types for ptcgp_trade_matcher

use std::fmt;

/// Which side of a trade a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSide {
    Mine,
    Theirs,
}

impl fmt::Display for ProfileSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSide::Mine => write!(f, "your profile"),
            ProfileSide::Theirs => write!(f, "the other player's profile"),
        }
    }
}

/// Unified error type for fetching, loading and matching
#[derive(Debug)]
pub enum MatchError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Failed to parse JSON (catalog file)
    Parse(serde_json::Error),
    /// File I/O error
    Io(std::io::Error),
    /// A profile URL was not supplied
    MissingInput(ProfileSide),
    /// A profile document could not be retrieved
    Fetch {
        side: ProfileSide,
        url: String,
        source: Box<MatchError>,
    },
}

/// Result alias for ptcgp_trade_matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;

impl MatchError {
    /// True when the failure comes from retrieving a profile rather than from the caller's input
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(
            self,
            MatchError::Fetch { .. }
                | MatchError::Network(_)
                | MatchError::HttpStatus { .. }
        )
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Network(e) => write!(f, "Network error: {}", e),
            MatchError::HttpStatus { status, .. } => write!(f, "HTTP error: {}", status),
            MatchError::Parse(e) => write!(f, "Parse error: {}", e),
            MatchError::Io(e) => write!(f, "I/O error: {}", e),
            MatchError::MissingInput(side) => {
                write!(f, "Both URLs must be provided: missing {}", side)
            }
            MatchError::Fetch { side, url, source } => {
                write!(f, "Could not retrieve {} from {}: {}", side, url, source)
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Network(e) => Some(e),
            MatchError::Parse(e) => Some(e),
            MatchError::Io(e) => Some(e),
            MatchError::Fetch { source, .. } => Some(source.as_ref()),
            MatchError::HttpStatus { .. } => None,
            MatchError::MissingInput(_) => None,
        }
    }
}

impl From<reqwest::Error> for MatchError {
    fn from(err: reqwest::Error) -> Self {
        MatchError::Network(err)
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Parse(err)
    }
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        MatchError::Io(err)
    }
}
