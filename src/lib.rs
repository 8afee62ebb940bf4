//! PTCGP Trade Matcher
//!
//! Finds mutually beneficial trades between two Pokemon TCG Pocket players by
//! comparing the wanted and tradable card lists on their profile pages.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod matcher;
pub mod pipeline;
pub mod profile;
pub mod profile_store;
pub mod report;
pub mod resolver;
pub mod sets;

pub use catalog::{CardIndex, CatalogEntry};
pub use config::MatcherConfig;
pub use error::{MatchError, ProfileSide, Result};
pub use fetch::{DocumentSource, HttpFetcher};
pub use matcher::{find_trades, TradeLists, TradeMatches};
pub use pipeline::{match_documents, run_match};
pub use profile::{ProfileDocument, RawCardRef, Section};
pub use profile_store::ProfileStore;
pub use report::OutputFormat;
pub use resolver::{Resolution, ResolvedCard, Resolver};
pub use sets::CardSet;
