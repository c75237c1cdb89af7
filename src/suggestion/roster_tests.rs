use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_parse_roster_json_valid() {
    let content = r#"[
        {"id": "ada", "name": "Ada Lovelace", "detail": "person"},
        {"id": "core", "name": "Core Team"}
    ]"#;

    let roster = parse_roster_json(content).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].detail.as_deref(), Some("person"));
    assert_eq!(roster[1].detail, None);
}

#[test]
fn test_parse_roster_json_missing_name_is_error() {
    let result = parse_roster_json(r#"[{"id": "ada"}]"#);
    assert!(matches!(result, Err(MentionsError::InvalidRoster(_))));
}

#[test]
fn test_load_roster_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, r#"[{"id": "ken", "name": "Ken Thompson"}]"#).unwrap();

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster, vec![Suggestion::new("ken", "Ken Thompson")]);
}

#[test]
fn test_load_roster_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_roster(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(MentionsError::Io(_))));
}

#[test]
fn test_default_roster_ids_are_unique() {
    let roster = default_roster();
    let mut ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), roster.len());
}
