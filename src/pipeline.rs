//! End-to-end matching: fetch both profiles, parse, resolve, intersect

use crate::catalog::CardIndex;
use crate::error::{MatchError, ProfileSide, Result};
use crate::fetch::DocumentSource;
use crate::matcher::{find_trades, TradeLists, TradeMatches};
use crate::profile::ProfileDocument;
use crate::resolver::Resolver;

/// Parse one profile page and resolve its cards
pub fn trade_lists(markup: &str, index: &CardIndex) -> TradeLists {
    let cards = ProfileDocument::parse(markup).card_refs();
    let resolver = Resolver::new(index);

    let lists = TradeLists {
        wanted: resolver.resolve_all(&cards.wanted),
        tradable: resolver.resolve_all(&cards.tradable),
    };
    log::debug!(
        "Profile lists {} wanted and {} tradable card(s)",
        lists.wanted.len(),
        lists.tradable.len()
    );
    lists
}

/// Match two already-retrieved profile pages
pub fn match_documents(mine: &str, theirs: &str, index: &CardIndex) -> TradeMatches {
    find_trades(&trade_lists(mine, index), &trade_lists(theirs, index))
}

async fn fetch_trade_lists<S: DocumentSource>(
    source: &S,
    side: ProfileSide,
    url: &str,
    index: &CardIndex,
) -> Result<TradeLists> {
    match source.fetch(url).await {
        Ok(markup) => Ok(trade_lists(&markup, index)),
        Err(e) => Err(MatchError::Fetch {
            side,
            url: url.to_string(),
            source: Box::new(e),
        }),
    }
}

fn require_url(url: Option<&str>, side: ProfileSide) -> Result<&str> {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(MatchError::MissingInput(side)),
    }
}

/// Fetch both profiles concurrently and compute the trades between them.
///
/// Fails if either URL is missing or either page can't be retrieved; no
/// matching is done against a partial pair of profiles.
pub async fn run_match<S: DocumentSource>(
    source: &S,
    index: &CardIndex,
    my_url: Option<&str>,
    their_url: Option<&str>,
) -> Result<TradeMatches> {
    let my_url = require_url(my_url, ProfileSide::Mine)?;
    let their_url = require_url(their_url, ProfileSide::Theirs)?;

    let (mine, theirs) = tokio::join!(
        fetch_trade_lists(source, ProfileSide::Mine, my_url, index),
        fetch_trade_lists(source, ProfileSide::Theirs, their_url, index),
    );

    Ok(find_trades(&mine?, &theirs?))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
