//! Tests for SuggestionsData and SectionProjection

use std::cell::Cell;
use std::sync::Arc;

use super::*;
use crate::suggestion::Suggestion;

fn people() -> Vec<Suggestion> {
    vec![
        Suggestion::new("ada", "Ada Lovelace").with_detail("person"),
        Suggestion::new("core", "Core Team").with_detail("team"),
        Suggestion::new("alan", "Alan Turing").with_detail("person"),
    ]
}

fn by_detail(items: &[Suggestion]) -> Vec<Section<Suggestion>> {
    let mut sections: Vec<Section<Suggestion>> = Vec::new();
    for item in items {
        let title = item.detail.clone().unwrap_or_default();
        match sections.iter_mut().find(|s| s.title == title) {
            Some(section) => section.items.push(item.clone()),
            None => sections.push(Section::new(title, vec![item.clone()])),
        }
    }
    sections
}

#[test]
fn test_flat_len_and_names() {
    let data = SuggestionsData::from(people());
    assert_eq!(data.len(), 3);
    assert!(!data.is_empty());
    let names: Vec<&str> = data.names().collect();
    assert_eq!(names, vec!["Ada Lovelace", "Core Team", "Alan Turing"]);
}

#[test]
fn test_sections_len_counts_items() {
    let data = SuggestionsData::sections(by_detail(&people()));
    assert_eq!(data.len(), 3);
    assert_eq!(data.names().count(), 3);
}

#[test]
fn test_default_is_empty() {
    let data: SuggestionsData<Suggestion> = SuggestionsData::default();
    assert!(data.is_empty());
}

#[test]
fn test_identity_is_pointer_based() {
    let a = SuggestionsData::from(people());
    let b = a.clone();
    let c = SuggestionsData::from(people());

    assert!(a.same_identity(&b));
    assert!(!a.same_identity(&c));
}

#[test]
fn test_projection_runs_once_per_identity() {
    let calls = Cell::new(0);
    let mut projection = SectionProjection::new();
    let data = SuggestionsData::from(people());

    let mapper = |items: &[Suggestion]| {
        calls.set(calls.get() + 1);
        by_detail(items)
    };

    assert!(projection.update(data.clone(), mapper));
    assert!(!projection.update(data.clone(), mapper));
    assert!(!projection.update(data, mapper));
    assert_eq!(calls.get(), 1);

    assert!(projection.update(SuggestionsData::from(people()), mapper));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_projection_groups_flat_list() {
    let mut projection = SectionProjection::new();
    projection.update(SuggestionsData::from(people()), by_detail);

    let sections = projection.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "person");
    assert_eq!(sections[0].items.len(), 2);
    assert_eq!(sections[1].title, "team");
    assert_eq!(projection.row_count(), 3);
}

#[test]
fn test_pre_grouped_sections_skip_mapper() {
    let mut projection = SectionProjection::new();
    let grouped: Arc<[Section<Suggestion>]> = Arc::from(by_detail(&people()));
    let data = SuggestionsData::Sections(Arc::clone(&grouped));

    projection.update(data, |_| panic!("mapper must not run for pre-grouped data"));
    assert_eq!(projection.sections().len(), grouped.len());
}

#[test]
fn test_position_walks_sections() {
    let mut projection = SectionProjection::new();
    projection.update(SuggestionsData::from(people()), by_detail);

    assert_eq!(projection.position(0), Some((0, 0)));
    assert_eq!(projection.position(1), Some((0, 1)));
    assert_eq!(projection.position(2), Some((1, 0)));
    assert_eq!(projection.position(3), None);
    assert_eq!(projection.item(2).map(|s| s.id.as_str()), Some("core"));
}
