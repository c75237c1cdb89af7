use std::sync::Arc;

use super::item::Mentionable;

/// Titled group of suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub title: String,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Suggestions handed to the widget by the caller.
///
/// Lists are shared so that identity (not content) decides when sections
/// need to be projected again.
#[derive(Debug)]
pub enum SuggestionsData<T> {
    Flat(Arc<[T]>),
    Sections(Arc<[Section<T>]>),
}

impl<T> Clone for SuggestionsData<T> {
    fn clone(&self) -> Self {
        match self {
            SuggestionsData::Flat(items) => SuggestionsData::Flat(Arc::clone(items)),
            SuggestionsData::Sections(sections) => SuggestionsData::Sections(Arc::clone(sections)),
        }
    }
}

impl<T> Default for SuggestionsData<T> {
    fn default() -> Self {
        SuggestionsData::Flat(Arc::from(Vec::new()))
    }
}

impl<T> From<Vec<T>> for SuggestionsData<T> {
    fn from(items: Vec<T>) -> Self {
        SuggestionsData::Flat(Arc::from(items))
    }
}

impl<T> SuggestionsData<T> {
    /// Pre-grouped suggestions, used as-is without projection
    pub fn sections(sections: Vec<Section<T>>) -> Self {
        SuggestionsData::Sections(Arc::from(sections))
    }

    /// Total number of suggestions, across sections when pre-grouped
    pub fn len(&self) -> usize {
        match self {
            SuggestionsData::Flat(items) => items.len(),
            SuggestionsData::Sections(sections) => sections.iter().map(|s| s.items.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both values refer to the same shared list
    pub fn same_identity(&self, other: &Self) -> bool {
        match (self, other) {
            (SuggestionsData::Flat(a), SuggestionsData::Flat(b)) => Arc::ptr_eq(a, b),
            (SuggestionsData::Sections(a), SuggestionsData::Sections(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            SuggestionsData::Flat(items) => Box::new(items.iter()),
            SuggestionsData::Sections(sections) => {
                Box::new(sections.iter().flat_map(|s| s.items.iter()))
            }
        }
    }
}

impl<T: Mentionable> SuggestionsData<T> {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items().map(Mentionable::name)
    }
}

/// Caches the sections derived from the current suggestions.
#[derive(Debug)]
pub struct SectionProjection<T> {
    source: SuggestionsData<T>,
    sections: Arc<[Section<T>]>,
}

impl<T> Default for SectionProjection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SectionProjection<T> {
    pub fn new() -> Self {
        Self {
            source: SuggestionsData::default(),
            sections: Arc::from(Vec::new()),
        }
    }

    /// Replace the source data. Flat lists are mapped only when their
    /// identity differs from the current source; returns whether sections
    /// were rebuilt.
    pub fn update<F>(&mut self, data: SuggestionsData<T>, mapper: F) -> bool
    where
        F: FnOnce(&[T]) -> Vec<Section<T>>,
    {
        if data.same_identity(&self.source) {
            return false;
        }

        self.sections = match &data {
            SuggestionsData::Flat(items) => Arc::from(mapper(items)),
            SuggestionsData::Sections(sections) => Arc::clone(sections),
        };
        self.source = data;
        true
    }

    pub fn source(&self) -> &SuggestionsData<T> {
        &self.source
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    /// Number of selectable rows across all sections
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Resolve a flat row index into `(section, item)` indices
    pub fn position(&self, row: usize) -> Option<(usize, usize)> {
        let mut remaining = row;
        for (section_idx, section) in self.sections.iter().enumerate() {
            if remaining < section.items.len() {
                return Some((section_idx, remaining));
            }
            remaining -= section.items.len();
        }
        None
    }

    pub fn item(&self, row: usize) -> Option<&T> {
        self.position(row)
            .map(|(section, item)| &self.sections[section].items[item])
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod sections_tests;
