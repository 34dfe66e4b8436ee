//! Tag vocabulary: every tag in use, sorted, with how many notes carry it.
//!
//! [`suggest`] narrows the vocabulary the way the editor's tag input does while
//! the user is typing.

use crate::commands::{CmdMessage, CmdResult, TagCount};
use crate::editor::NoteEditor;
use crate::error::Result;
use crate::model::Note;
use crate::session::Session;
use crate::store::NoteBackend;

fn count(notes: &[Note], name: String) -> TagCount {
    let count = notes.iter().filter(|n| n.has_tag(&name)).count();
    TagCount { name, count }
}

pub fn run<B: NoteBackend>(session: &Session<B>) -> Result<CmdResult> {
    let notes = session.notes();
    let tags: Vec<TagCount> = session
        .all_tags()
        .into_iter()
        .map(|name| count(notes, name))
        .collect();

    let mut result = CmdResult::default();
    if tags.is_empty() {
        result.add_message(CmdMessage::info("Add tags to notes to filter them fast."));
    }
    Ok(result.with_tags(tags))
}

/// Tags containing `partial`, at most `limit` of them.
pub fn suggest<B: NoteBackend>(
    session: &Session<B>,
    partial: &str,
    limit: usize,
) -> Result<CmdResult> {
    let mut editor = NoteEditor::new();
    editor.set_tag_input(partial.trim());

    let all = session.all_tags();
    let tags: Vec<TagCount> = editor
        .suggestions(&all, limit)
        .into_iter()
        .map(|name| count(session.notes(), name.to_string()))
        .collect();

    let mut result = CmdResult::default();
    if tags.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No tags match \"{}\".",
            partial.trim()
        )));
    }
    Ok(result.with_tags(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;
    use crate::store::memory::MemBackend;

    fn session() -> Session<MemBackend> {
        let mut session = Session::open(MemBackend::new()).unwrap();
        session
            .create(NotePayload::new("1", "").with_tags(["a", "b"]))
            .unwrap();
        session
            .create(NotePayload::new("2", "").with_tags(["c", "b"]))
            .unwrap();
        session
    }

    #[test]
    fn counts_usage_per_tag() {
        let result = run(&session()).unwrap();

        let pairs: Vec<_> = result
            .tags
            .iter()
            .map(|t| (t.name.as_str(), t.count))
            .collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn hints_when_no_tags_exist() {
        let session = Session::open(MemBackend::new()).unwrap();
        let result = run(&session).unwrap();
        assert!(result.tags.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn suggestions_match_case_insensitively_and_respect_limit() {
        let mut session = Session::open(MemBackend::new()).unwrap();
        session
            .create(NotePayload::new("x", "").with_tags(["rust", "trust", "ruby", "go"]))
            .unwrap();

        let result = suggest(&session, "RU", 6).unwrap();
        let names: Vec<_> = result.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["ruby", "rust", "trust"]);

        let result = suggest(&session, "ru", 2).unwrap();
        assert_eq!(result.tags.len(), 2);
    }

    #[test]
    fn no_suggestions_leaves_a_hint() {
        let result = suggest(&session(), "zzz", 6).unwrap();
        assert!(result.tags.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
