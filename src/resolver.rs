//! Resolution of raw card references to display labels via the card index

use crate::catalog::CardIndex;
use crate::profile::RawCardRef;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Outcome of looking a card up in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the catalog; `number` is the catalog's own number
    Known {
        name: String,
        set_name: &'static str,
        number: String,
    },
    /// Set is known but the card isn't in the catalog
    Unknown {
        set_name: &'static str,
        number: String,
    },
}

impl Resolution {
    pub fn is_known(&self) -> bool {
        matches!(self, Resolution::Known { .. })
    }

    /// Compose the display label, e.g. "Bulbasaur (Genetic Apex (A1)-001)"
    pub fn label(&self) -> String {
        match self {
            Resolution::Known {
                name,
                set_name,
                number,
            } => format!("{} ({}-{})", name, set_name, number),
            Resolution::Unknown { set_name, number } => {
                format!("Unknown ({}-{})", set_name, number)
            }
        }
    }
}

/// A card identified by its display label.
///
/// Two cards are the same card when their labels are equal, so two distinct
/// unresolved cards can share one "Unknown (...)" identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResolvedCard(String);

impl ResolvedCard {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Key used for equality when intersecting card lists
    pub fn match_key(&self) -> &str {
        &self.0
    }
}

impl From<Resolution> for ResolvedCard {
    fn from(resolution: Resolution) -> Self {
        Self(resolution.label())
    }
}

impl fmt::Display for ResolvedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Left-pad a card number with zeros to three digits ("7" -> "007").
/// Longer numbers pass through unchanged.
pub fn pad_number(number: &str) -> String {
    format!("{:0>3}", number)
}

/// Resolves raw references against a borrowed card index
pub struct Resolver<'a> {
    index: &'a CardIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a CardIndex) -> Self {
        Self { index }
    }

    pub fn resolve(&self, card: &RawCardRef) -> Resolution {
        let set_name = card.set.display_name();
        let padded = pad_number(&card.number);

        match self.index.get(set_name, &padded) {
            Some(entry) => Resolution::Known {
                name: entry.name.clone(),
                set_name,
                number: entry.number.clone(),
            },
            None => {
                log::debug!("No catalog entry for {}-{}", set_name, padded);
                Resolution::Unknown {
                    set_name,
                    number: padded,
                }
            }
        }
    }

    /// Resolve a whole card list into display-label identities
    pub fn resolve_all<'r, I>(&self, cards: I) -> HashSet<ResolvedCard>
    where
        I: IntoIterator<Item = &'r RawCardRef>,
    {
        cards
            .into_iter()
            .map(|card| ResolvedCard::from(self.resolve(card)))
            .collect()
    }
}
