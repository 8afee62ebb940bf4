//! Tests for profile page parsing

use super::{ProfileCards, ProfileDocument, RawCardRef, Section};
use crate::sets::CardSet;

const IMG_BASE: &str = "https://cdn.example.com/pocket/cards";

fn img(set_key: &str, number: &str) -> String {
    format!(r#"<img src="{IMG_BASE}/{set_key}/full/{number}.webp" alt="card">"#)
}

fn profile_page(wanted: &[String], tradable: &[String]) -> String {
    format!(
        r#"<html><body>
        <div class="profile-header"><h1>Player</h1></div>
        <div class="cards-wrapper">
            <div class="wanted section">
                <h2>Wanted</h2>
                <div class="cards">{}</div>
            </div>
            <div class="tradable section">
                <h2>Tradable</h2>
                <div class="cards">{}</div>
            </div>
        </div>
        </body></html>"#,
        wanted.join("\n"),
        tradable.join("\n")
    )
}

fn raw(set: CardSet, number: &str) -> RawCardRef {
    RawCardRef {
        set,
        number: number.to_string(),
    }
}

// ── RawCardRef::from_image_src ──────────────────────────────────────

#[test]
fn image_src_extracts_set_and_number() {
    let card = RawCardRef::from_image_src("/img/genetic_apex/full/12.webp").unwrap();
    assert_eq!(card, raw(CardSet::GeneticApex, "12"));
}

#[test]
fn image_src_keeps_number_unpadded() {
    let card = RawCardRef::from_image_src("a/triumphant_light/b/7.webp").unwrap();
    assert_eq!(card.number, "7");
}

#[test]
fn image_src_strips_other_extensions() {
    let card = RawCardRef::from_image_src("x/mythical_island/y/45.png").unwrap();
    assert_eq!(card, raw(CardSet::MythicalIsland, "45"));
}

#[test]
fn image_src_unknown_set_is_skipped() {
    assert!(RawCardRef::from_image_src("/img/unknown_set/full/1.webp").is_none());
}

#[test]
fn image_src_too_short_is_skipped() {
    assert!(RawCardRef::from_image_src("genetic_apex/1.webp").is_none());
    assert!(RawCardRef::from_image_src("1.webp").is_none());
}

// ── ProfileDocument::extract_cards ──────────────────────────────────

#[test]
fn extracts_wanted_and_tradable_separately() {
    let page = profile_page(
        &[img("genetic_apex", "1"), img("space_time_smackdown", "20")],
        &[img("mythical_island", "3")],
    );
    let doc = ProfileDocument::parse(&page);

    let wanted = doc.extract_cards(Section::Wanted);
    assert_eq!(wanted.len(), 2);
    assert!(wanted.contains(&raw(CardSet::GeneticApex, "1")));
    assert!(wanted.contains(&raw(CardSet::SpaceTimeSmackdown, "20")));

    let tradable = doc.extract_cards(Section::Tradable);
    assert_eq!(tradable.len(), 1);
    assert!(tradable.contains(&raw(CardSet::MythicalIsland, "3")));
}

#[test]
fn repeated_images_are_deduplicated() {
    let page = profile_page(
        &[
            img("genetic_apex", "1"),
            img("genetic_apex", "1"),
            img("genetic_apex", "1"),
        ],
        &[],
    );
    let doc = ProfileDocument::parse(&page);

    assert_eq!(doc.extract_cards(Section::Wanted).len(), 1);
}

#[test]
fn unknown_sets_never_appear_in_output() {
    let page = profile_page(
        &[img("unknown_set", "5"), img("genetic_apex", "5")],
        &[img("unknown_set", "9")],
    );
    let cards = ProfileDocument::parse(&page).card_refs();

    assert_eq!(cards.wanted.len(), 1);
    assert!(cards.wanted.contains(&raw(CardSet::GeneticApex, "5")));
    assert!(cards.tradable.is_empty());
}

#[test]
fn missing_wrapper_yields_empty_sections() {
    let page = r#"<html><body><div class="wanted"><div class="cards">
        <img src="/a/genetic_apex/b/1.webp"></div></div></body></html>"#;
    let cards = ProfileDocument::parse(page).card_refs();

    assert!(cards.wanted.is_empty());
    assert!(cards.tradable.is_empty());
}

#[test]
fn missing_section_only_empties_that_section() {
    let page = format!(
        r#"<div class="cards-wrapper"><div class="wanted"><div class="cards">{}</div></div></div>"#,
        img("genetic_apex", "4")
    );
    let cards = ProfileDocument::parse(&page).card_refs();

    assert_eq!(cards.wanted.len(), 1);
    assert!(cards.tradable.is_empty());
}

#[test]
fn missing_cards_listing_yields_empty_section() {
    let page = format!(
        r#"<div class="cards-wrapper"><div class="wanted">{}</div></div>"#,
        img("genetic_apex", "4")
    );
    let doc = ProfileDocument::parse(&page);

    assert!(doc.extract_cards(Section::Wanted).is_empty());
}

#[test]
fn images_without_src_are_ignored() {
    let page = profile_page(&[r#"<img alt="lazy">"#.to_string(), img("genetic_apex", "2")], &[]);
    let wanted = ProfileDocument::parse(&page).extract_cards(Section::Wanted);

    assert_eq!(wanted.len(), 1);
}

#[test]
fn nested_images_inside_cards_listing_are_found() {
    let page = format!(
        r#"<div class="cards-wrapper"><div class="tradable"><div class="cards">
            <a href="/card/1"><figure>{}</figure></a>
        </div></div></div>"#,
        img("triumphant_light", "60")
    );
    let tradable = ProfileDocument::parse(&page).extract_cards(Section::Tradable);

    assert!(tradable.contains(&raw(CardSet::TriumphantLight, "60")));
}

#[test]
fn empty_document_is_not_an_error() {
    let cards = ProfileDocument::parse("").card_refs();
    assert_eq!(cards, ProfileCards::default());
}
