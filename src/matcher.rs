//! Trade matching between two players' card lists

use crate::resolver::ResolvedCard;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// One player's resolved card lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeLists {
    pub wanted: HashSet<ResolvedCard>,
    pub tradable: HashSet<ResolvedCard>,
}

/// Cards that can change hands in each direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TradeMatches {
    /// Cards I want that they can trade
    pub you_receive: BTreeSet<ResolvedCard>,
    /// Cards they want that I can trade
    pub they_receive: BTreeSet<ResolvedCard>,
}

impl TradeMatches {
    pub fn is_empty(&self) -> bool {
        self.you_receive.is_empty() && self.they_receive.is_empty()
    }
}

/// Cards present in `wanted` that also appear in `offered`, compared by match key
pub fn intersect(
    wanted: &HashSet<ResolvedCard>,
    offered: &HashSet<ResolvedCard>,
) -> BTreeSet<ResolvedCard> {
    let offered_keys: HashSet<&str> = offered.iter().map(ResolvedCard::match_key).collect();
    wanted
        .iter()
        .filter(|card| offered_keys.contains(card.match_key()))
        .cloned()
        .collect()
}

/// Compute both trade directions
pub fn find_trades(mine: &TradeLists, theirs: &TradeLists) -> TradeMatches {
    let matches = TradeMatches {
        you_receive: intersect(&mine.wanted, &theirs.tradable),
        they_receive: intersect(&theirs.wanted, &mine.tradable),
    };
    log::info!(
        "Found {} card(s) you can receive and {} card(s) they can receive",
        matches.you_receive.len(),
        matches.they_receive.len()
    );
    matches
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
