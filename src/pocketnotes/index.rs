//! # Note selectors
//!
//! Notes are identified by UUIDs, which nobody wants to type. Clients may refer to
//! a note in three ways:
//!
//! - `3`: the third note in natural (insertion) order, 1-based. This is the number
//!   shown next to each note in an unfiltered listing.
//! - `1f0c9a2e`: a prefix of the note's id, at least [`MIN_PREFIX_LEN`] hex chars.
//! - a full UUID.
//!
//! Positions are resolved against the whole collection, never against a filtered
//! view, so a number keeps pointing at the same note whatever the search state.

use crate::error::{NotesError, Result};
use crate::model::Note;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_PREFIX_LEN: usize = 4;

/// A note paired with its 1-based position in natural order.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub position: usize,
}

/// Pairs each of `selected` with its position in `all`.
pub fn display_notes<'a, I>(all: &[Note], selected: I) -> Vec<DisplayNote>
where
    I: IntoIterator<Item = &'a Note>,
{
    selected
        .into_iter()
        .filter_map(|note| {
            position_of(all, &note.id).map(|position| DisplayNote {
                note: note.clone(),
                position,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Position(usize),
    Id(Uuid),
    Prefix(String),
}

impl std::fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteSelector::Position(n) => write!(f, "{}", n),
            NoteSelector::Id(id) => write!(f, "{}", id),
            NoteSelector::Prefix(p) => write!(f, "{}…", p),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Positions start at 1".to_string());
            }
            return Ok(NoteSelector::Position(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(NoteSelector::Id(id));
        }
        let prefix = s.to_lowercase();
        if prefix.len() >= MIN_PREFIX_LEN
            && prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
        {
            return Ok(NoteSelector::Prefix(prefix));
        }
        Err(format!("Invalid note selector: {}", s))
    }
}

impl NoteSelector {
    /// Finds the note this selector points at.
    pub fn resolve<'a>(&self, notes: &'a [Note]) -> Result<&'a Note> {
        match self {
            NoteSelector::Position(n) => n
                .checked_sub(1)
                .and_then(|i| notes.get(i))
                .ok_or_else(|| NotesError::Api(format!("No note at position {}", n))),
            NoteSelector::Id(id) => notes
                .iter()
                .find(|note| &note.id == id)
                .ok_or_else(|| NotesError::Api(format!("Note not found: {}", id))),
            NoteSelector::Prefix(prefix) => {
                let mut found = notes
                    .iter()
                    .filter(|note| note.id.to_string().starts_with(prefix.as_str()));
                match (found.next(), found.next()) {
                    (Some(note), None) => Ok(note),
                    (None, _) => Err(NotesError::Api(format!(
                        "No note id starts with {}",
                        prefix
                    ))),
                    (Some(_), Some(_)) => Err(NotesError::Api(format!(
                        "Id prefix {} is ambiguous",
                        prefix
                    ))),
                }
            }
        }
    }
}

/// 1-based position of `id` in natural order.
pub fn position_of(notes: &[Note], id: &Uuid) -> Option<usize> {
    notes.iter().position(|n| &n.id == id).map(|p| p + 1)
}

/// Parses every input as a selector, failing on the first invalid one.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    inputs
        .iter()
        .map(|s| NoteSelector::from_str(s.as_ref()).map_err(NotesError::Api))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;

    fn notes(n: usize) -> Vec<Note> {
        (1..=n)
            .map(|i| Note::new(NotePayload::new(format!("Note {}", i), "")))
            .collect()
    }

    #[test]
    fn parses_positions_ids_and_prefixes() {
        assert_eq!(NoteSelector::from_str("1"), Ok(NoteSelector::Position(1)));
        assert_eq!(NoteSelector::from_str("42"), Ok(NoteSelector::Position(42)));
        assert_eq!(
            NoteSelector::from_str("ABCD12"),
            Ok(NoteSelector::Prefix("abcd12".to_string()))
        );

        let id = Uuid::new_v4();
        assert_eq!(
            NoteSelector::from_str(&id.to_string()),
            Ok(NoteSelector::Id(id))
        );

        assert!(NoteSelector::from_str("0").is_err());
        assert!(NoteSelector::from_str("").is_err());
        assert!(NoteSelector::from_str("abc").is_err());
        assert!(NoteSelector::from_str("groceries").is_err());
    }

    #[test]
    fn resolves_positions() {
        let notes = notes(3);
        let note = NoteSelector::Position(2).resolve(&notes).unwrap();
        assert_eq!(note.title, "Note 2");
        assert!(NoteSelector::Position(4).resolve(&notes).is_err());
    }

    #[test]
    fn resolves_ids_and_prefixes() {
        let notes = notes(2);
        let target = &notes[1];

        let by_id = NoteSelector::Id(target.id).resolve(&notes).unwrap();
        assert_eq!(by_id.id, target.id);

        let prefix = target.id.to_string()[..12].to_string();
        let by_prefix = NoteSelector::Prefix(prefix).resolve(&notes).unwrap();
        assert_eq!(by_prefix.id, target.id);

        assert!(NoteSelector::Id(Uuid::new_v4()).resolve(&notes).is_err());
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let mut notes = notes(2);
        notes[0].id = Uuid::parse_str("aaaa0000-0000-4000-8000-000000000001").unwrap();
        notes[1].id = Uuid::parse_str("aaaa0000-0000-4000-8000-000000000002").unwrap();

        let err = NoteSelector::Prefix("aaaa".to_string())
            .resolve(&notes)
            .unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }

    #[test]
    fn position_of_is_one_based() {
        let notes = notes(3);
        assert_eq!(position_of(&notes, &notes[2].id), Some(3));
        assert_eq!(position_of(&notes, &Uuid::new_v4()), None);
    }

    #[test]
    fn display_notes_use_natural_positions() {
        let notes = notes(3);
        let shown = display_notes(&notes, [&notes[2], &notes[0]]);
        let positions: Vec<_> = shown.iter().map(|d| d.position).collect();
        assert_eq!(positions, vec![3, 1]);
    }

    #[test]
    fn parse_selectors_reports_bad_input() {
        assert!(parse_selectors(&["1", "2"]).is_ok());
        assert!(parse_selectors(&["1", "nope"]).is_err());
    }
}
