//! Profile page parsing
//!
//! A profile page lists a player's cards as images:
//!
//! ```html
//! <div class="cards-wrapper">
//!   <div class="wanted"><div class="cards"><img src=".../genetic_apex/full/1.webp"></div></div>
//!   <div class="tradable"><div class="cards">...</div></div>
//! </div>
//! ```
//!
//! Missing elements never fail the parse; the affected section is just empty.

use crate::sets::CardSet;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static WRAPPER: LazyLock<Selector> = LazyLock::new(|| selector("div.cards-wrapper"));
static WANTED: LazyLock<Selector> = LazyLock::new(|| selector("div.wanted"));
static TRADABLE: LazyLock<Selector> = LazyLock::new(|| selector("div.tradable"));
static CARDS: LazyLock<Selector> = LazyLock::new(|| selector("div.cards"));
static IMAGES: LazyLock<Selector> = LazyLock::new(|| selector("img"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// The two card lists on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Wanted,
    Tradable,
}

impl Section {
    /// CSS class of the section's container
    pub fn class_name(&self) -> &'static str {
        match self {
            Section::Wanted => "wanted",
            Section::Tradable => "tradable",
        }
    }

    fn selector(&self) -> &'static Selector {
        match self {
            Section::Wanted => &*WANTED,
            Section::Tradable => &*TRADABLE,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A card as referenced by an image path, before catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawCardRef {
    pub set: CardSet,
    /// Number taken verbatim from the file name (e.g. "7")
    pub number: String,
}

impl RawCardRef {
    /// Parse an image path like `.../genetic_apex/full/12.webp`.
    ///
    /// The set key is the third-from-last path segment and the number is the
    /// file name without its extension. Returns `None` for paths that are too
    /// short or whose set key isn't known.
    pub fn from_image_src(src: &str) -> Option<Self> {
        let parts: Vec<&str> = src.split('/').collect();
        if parts.len() < 3 {
            return None;
        }

        let set_key = parts[parts.len() - 3];
        let file_name = parts[parts.len() - 1];
        let number = file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _ext)| stem);

        match CardSet::from_key(set_key) {
            Some(set) => Some(Self {
                set,
                number: number.to_string(),
            }),
            None => {
                log::debug!("Skipping card from unknown set '{}': {}", set_key, src);
                None
            }
        }
    }
}

/// Raw card references for both sections of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCards {
    pub wanted: HashSet<RawCardRef>,
    pub tradable: HashSet<RawCardRef>,
}

/// A parsed profile page
pub struct ProfileDocument {
    html: Html,
}

impl ProfileDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Extract the distinct cards listed in one section
    pub fn extract_cards(&self, section: Section) -> HashSet<RawCardRef> {
        let Some(cards) = self.cards_container(section) else {
            return HashSet::new();
        };

        cards
            .select(&IMAGES)
            .filter_map(|img| match img.value().attr("src") {
                Some(src) => RawCardRef::from_image_src(src),
                None => {
                    log::debug!("Skipping image without src in '{}' section", section);
                    None
                }
            })
            .collect()
    }

    /// Extract both the wanted and tradable sections
    pub fn card_refs(&self) -> ProfileCards {
        ProfileCards {
            wanted: self.extract_cards(Section::Wanted),
            tradable: self.extract_cards(Section::Tradable),
        }
    }

    fn cards_container(&self, section: Section) -> Option<ElementRef<'_>> {
        let Some(wrapper) = self.html.select(&WRAPPER).next() else {
            log::warn!("No card wrapper found!");
            return None;
        };

        let Some(section_el) = wrapper.select(section.selector()).next() else {
            log::warn!("Section '{}' not found within wrapper!", section);
            return None;
        };

        let cards = section_el.select(&CARDS).next();
        if cards.is_none() {
            log::warn!("Cards section not found inside '{}'!", section);
        }
        cards
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
