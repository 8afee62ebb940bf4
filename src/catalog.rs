//! Card reference index built from the static card catalog

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Card catalog entry as stored in `card_data.json`
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogEntry {
    /// Catalog id, e.g. "a1-007"; the card number follows the last '-'
    pub id: String,
    pub name: String,
    /// Full set display name, e.g. "Genetic Apex (A1)"
    pub set: String,
}

impl CatalogEntry {
    /// Card number as the catalog numbers it (substring after the last '-')
    pub fn card_number(&self) -> &str {
        self.id.rsplit('-').next().unwrap_or(&self.id)
    }
}

/// Card data stored in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCard {
    pub name: String,
    /// Number exactly as the catalog stores it
    pub number: String,
}

/// Lookup of "{set}-{number}" to card data
#[derive(Debug, Default)]
pub struct CardIndex {
    entries: HashMap<String, IndexedCard>,
}

impl CardIndex {
    /// Build the index from catalog entries. Keys are not re-padded.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let number = entry.card_number().to_string();
                let key = Self::key(&entry.set, &number);
                (
                    key,
                    IndexedCard {
                        name: entry.name,
                        number,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of catalog entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::build(entries))
    }

    /// Load the catalog file, failing on any I/O or parse error
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the catalog file, or return an empty index if it can't be read.
    ///
    /// Matching still works against an empty index; every card just resolves
    /// to "Unknown".
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::error!(
                "Card catalog {} not found, card names will show as Unknown",
                path.display()
            );
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(index) => {
                log::info!(
                    "Loaded card catalog with {} entries from {}",
                    index.len(),
                    path.display()
                );
                index
            }
            Err(e) => {
                log::error!(
                    "Failed to load card catalog {}, card names will show as Unknown: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Generate the lookup key from set display name and card number
    pub fn key(set_name: &str, number: &str) -> String {
        format!("{}-{}", set_name, number)
    }

    /// Look up a card by set display name and (padded) number
    pub fn get(&self, set_name: &str, number: &str) -> Option<&IndexedCard> {
        self.entries.get(&Self::key(set_name, number))
    }

    /// Get the number of indexed cards
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
