use std::fs;
use std::path::Path;

use super::item::Suggestion;
use crate::error::MentionsError;

/// Read a JSON array of suggestions
pub fn load_roster(path: &Path) -> Result<Vec<Suggestion>, MentionsError> {
    let contents = fs::read_to_string(path)?;
    parse_roster_json(&contents)
}

pub fn parse_roster_json(content: &str) -> Result<Vec<Suggestion>, MentionsError> {
    serde_json::from_str(content).map_err(|e| MentionsError::InvalidRoster(e.to_string()))
}

/// Roster used by the demo when no file is given
pub fn default_roster() -> Vec<Suggestion> {
    [
        ("ada", "Ada Lovelace", "person"),
        ("alan", "Alan Turing", "person"),
        ("grace", "Grace Hopper", "person"),
        ("edsger", "Edsger Dijkstra", "person"),
        ("barbara", "Barbara Liskov", "person"),
        ("ken", "Ken Thompson", "person"),
        ("dennis", "Dennis Ritchie", "person"),
        ("core", "Core Team", "team"),
        ("infra", "Infrastructure", "team"),
        ("design", "Design Review", "team"),
    ]
    .into_iter()
    .map(|(id, name, detail)| Suggestion::new(id, name).with_detail(detail))
    .collect()
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
