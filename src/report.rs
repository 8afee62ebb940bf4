//! Rendering of trade matches for display

use crate::error::Result;
use crate::matcher::TradeMatches;
use crate::resolver::ResolvedCard;
use std::collections::BTreeSet;

/// Output format for match results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Placeholder shown for an empty match list
pub const NONE_PLACEHOLDER: &str = "None";

/// Newline-joined card labels, or "None" when empty
pub fn format_card_list(cards: &BTreeSet<ResolvedCard>) -> String {
    if cards.is_empty() {
        return NONE_PLACEHOLDER.to_string();
    }
    cards
        .iter()
        .map(ResolvedCard::label)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable match report
pub fn format_text(matches: &TradeMatches) -> String {
    let mut output = String::from("=== Trade Matches ===\n");
    output.push_str("You can receive from them:\n");
    output.push_str(&format_card_list(&matches.you_receive));
    output.push_str("\n\n");
    output.push_str("They can receive from you:\n");
    output.push_str(&format_card_list(&matches.they_receive));
    output.push('\n');
    output
}

/// Pretty-printed JSON report
pub fn format_json(matches: &TradeMatches) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

pub fn render(matches: &TradeMatches, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(matches)),
        OutputFormat::Json => format_json(matches),
    }
}
