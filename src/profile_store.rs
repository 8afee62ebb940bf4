use crate::error::Result;
use std::path::{Path, PathBuf};

/// Remembers the user's own profile URL between runs as a plain text file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved profile URL, if there is a non-empty one
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let url = content.trim();
                if url.is_empty() {
                    None
                } else {
                    log::info!("Loaded saved profile URL from {}", self.path.display());
                    Some(url.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!(
                    "Failed to read saved profile {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Save the profile URL, replacing any previous one
    pub fn save(&self, url: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, url.trim())?;

        log::debug!("Saved profile URL to {}", self.path.display());
        Ok(())
    }
}
