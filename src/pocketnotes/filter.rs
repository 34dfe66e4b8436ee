//! Free-text and tag filtering over the note collection.
//!
//! A note is visible when it satisfies both predicates:
//!
//! - **Query**: the trimmed, lowercased query is empty, or it is a substring of the
//!   lowercased title, the lowercased content, or any tag.
//! - **Tags**: no tags are active, or the note carries every active tag (AND).
//!
//! Results keep the collection's natural (insertion) order. There is no ranking.

use crate::model::Note;
use crate::tags::normalize_tag;
use std::collections::BTreeSet;

/// The set of tags currently selected as an AND-filter, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveTags(Vec<String>);

impl ActiveTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `tag` if it is not active, deselects it otherwise.
    /// Returns whether the tag is active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if let Some(pos) = self.0.iter().position(|t| *t == tag) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(tag);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for ActiveTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut active = ActiveTags::new();
        for tag in iter {
            if let Some(tag) = normalize_tag(tag.as_ref()) {
                if !active.contains(&tag) {
                    active.0.push(tag);
                }
            }
        }
        active
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    query: String,
    pub active_tags: ActiveTags,
}

impl NoteFilter {
    pub fn new(query: &str, active_tags: ActiveTags) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            active_tags,
        }
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.active_tags.is_empty()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_query(note) && self.matches_tags(note)
    }

    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|n| self.matches(n)).collect()
    }

    fn matches_query(&self, note: &Note) -> bool {
        self.query.is_empty()
            || note.title.to_lowercase().contains(&self.query)
            || note.content.to_lowercase().contains(&self.query)
            || note.tags.iter().any(|tag| tag.contains(&self.query))
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.active_tags
            .as_slice()
            .iter()
            .all(|tag| note.has_tag(tag))
    }
}

/// Notes matching `query` and carrying every tag in `active_tags`, in natural order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str, active_tags: &ActiveTags) -> Vec<&'a Note> {
    NoteFilter::new(query, active_tags.clone()).apply(notes)
}

/// Every tag used by any note, deduplicated and sorted ascending.
pub fn available_tags(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .flat_map(|n| n.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        Note::new(NotePayload::new(title, content).with_tags(tags.iter().copied()))
    }

    fn sample() -> Vec<Note> {
        vec![note("Trip", "", &["travel"]), note("Groceries", "", &["home"])]
    }

    fn titles(notes: Vec<&Note>) -> Vec<&str> {
        notes.into_iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let notes = sample();
        let result = filter_notes(&notes, "trip", &ActiveTags::new());
        assert_eq!(titles(result), vec!["Trip"]);
    }

    #[test]
    fn active_tag_selects_tagged_notes() {
        let notes = sample();
        let active: ActiveTags = ["home"].into_iter().collect();
        assert_eq!(titles(filter_notes(&notes, "", &active)), vec!["Groceries"]);
    }

    #[test]
    fn query_and_tags_are_and_combined() {
        let notes = sample();
        let active: ActiveTags = ["home"].into_iter().collect();
        // "o" appears in both titles, only one note has the tag
        assert_eq!(titles(filter_notes(&notes, "o", &active)), vec!["Groceries"]);
    }

    #[test]
    fn multiple_active_tags_require_all() {
        let notes = vec![
            note("A", "", &["work", "rust"]),
            note("B", "", &["work"]),
            note("C", "", &["rust"]),
        ];
        let active: ActiveTags = ["work", "rust"].into_iter().collect();
        assert_eq!(titles(filter_notes(&notes, "", &active)), vec!["A"]);
    }

    #[test]
    fn query_matches_content_and_tags() {
        let notes = vec![
            note("One", "Buy MILK", &[]),
            note("Two", "", &["milkshake"]),
            note("Three", "nothing", &[]),
        ];
        let result = filter_notes(&notes, "  Milk ", &ActiveTags::new());
        assert_eq!(titles(result), vec!["One", "Two"]);
    }

    #[test]
    fn blank_query_and_no_tags_returns_everything_in_order() {
        let notes = vec![note("c", "", &[]), note("a", "", &[]), note("b", "", &[])];
        let result = filter_notes(&notes, "   ", &ActiveTags::new());
        assert_eq!(titles(result), vec!["c", "a", "b"]);
    }

    #[test]
    fn results_are_not_reordered_by_relevance() {
        let notes = vec![note("notes about trip", "", &[]), note("trip", "", &[])];
        let result = filter_notes(&notes, "trip", &ActiveTags::new());
        assert_eq!(titles(result), vec!["notes about trip", "trip"]);
    }

    #[test]
    fn available_tags_is_sorted_union() {
        let notes = vec![note("1", "", &["a", "b"]), note("2", "", &["b", "c"])];
        assert_eq!(available_tags(&notes), vec!["a", "b", "c"]);
    }

    #[test]
    fn available_tags_empty_collection() {
        assert!(available_tags(&[]).is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut active = ActiveTags::new();
        assert!(active.toggle("Home"));
        assert!(active.contains("home"));
        assert!(!active.toggle("home"));
        assert!(active.is_empty());
    }

    #[test]
    fn toggle_ignores_blank_tags() {
        let mut active = ActiveTags::new();
        assert!(!active.toggle("  "));
        assert!(active.is_empty());
    }

    #[test]
    fn clear_resets_selection() {
        let mut active: ActiveTags = ["a", "b"].into_iter().collect();
        active.clear();
        assert!(active.is_empty());
    }
}
