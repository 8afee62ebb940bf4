use ptcgp_trade_matcher::catalog::CardIndex;
use ptcgp_trade_matcher::error::MatchError;
use std::io::Write;
use tempfile::NamedTempFile;

// Test fixtures - sample catalog data

fn create_sample_catalog_content() -> String {
    r#"[
    {"id": "a1-001", "name": "Bulbasaur", "set": "Genetic Apex (A1)"},
    {"id": "a1-096", "name": "Pikachu ex", "set": "Genetic Apex (A1)"},
    {"id": "a1a-032", "name": "Mew ex", "set": "Mythical Island (A1a)"},
    {"id": "a2-119", "name": "Dialga ex", "set": "Space-Time Smackdown (A2)"},
    {"id": "a2a-8", "name": "Unpadded", "set": "Triumphant Light (A2a)"}
]"#
    .to_string()
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_load_valid_catalog() {
    let temp_file = write_temp(&create_sample_catalog_content());

    let index = CardIndex::load(temp_file.path());

    assert_eq!(index.len(), 5);
    assert_eq!(index.get("Genetic Apex (A1)", "096").unwrap().name, "Pikachu ex");
    assert_eq!(index.get("Mythical Island (A1a)", "032").unwrap().number, "032");
}

#[test]
fn test_load_keeps_catalog_numbering() {
    let temp_file = write_temp(&create_sample_catalog_content());

    let index = CardIndex::load(temp_file.path());

    assert!(index.get("Triumphant Light (A2a)", "008").is_none());
    assert_eq!(index.get("Triumphant Light (A2a)", "8").unwrap().number, "8");
}

#[test]
fn test_load_missing_file_gives_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let index = CardIndex::load(&dir.path().join("card_data.json"));
    assert!(index.is_empty());
}

#[test]
fn test_load_invalid_json_gives_empty_index() {
    let temp_file = write_temp("this is not json");
    let index = CardIndex::load(temp_file.path());
    assert!(index.is_empty());
}

#[test]
fn test_try_load_reports_errors() {
    let temp_file = write_temp(r#"[{"id": "a1-001"}]"#);
    assert!(matches!(
        CardIndex::try_load(temp_file.path()),
        Err(MatchError::Parse(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        CardIndex::try_load(&dir.path().join("missing.json")),
        Err(MatchError::Io(_))
    ));
}

#[test]
fn test_empty_catalog_array() {
    let temp_file = write_temp("[]");
    let index = CardIndex::try_load(temp_file.path()).unwrap();
    assert!(index.is_empty());
}
