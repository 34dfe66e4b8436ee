use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{position_of, DisplayNote, NoteSelector};
use crate::session::Session;
use crate::store::NoteBackend;
use uuid::Uuid;

pub fn run<B: NoteBackend>(session: &mut Session<B>, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Resolve everything up front: positions shift as soon as the first note goes
    let mut targets: Vec<(Uuid, usize)> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector.resolve(session.notes()) {
            Ok(note) => {
                let position = position_of(session.notes(), &note.id).unwrap_or_default();
                if !targets.iter().any(|(id, _)| *id == note.id) {
                    targets.push((note.id, position));
                }
            }
            Err(e) => result.add_message(CmdMessage::warning(format!("Skipped {}: {}", selector, e))),
        }
    }

    for (id, position) in targets {
        if let Some(change) = session.delete(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Note deleted ({}): {}",
                position,
                change.note.display_title()
            )));
            result.affected_notes.push(DisplayNote {
                note: change.note,
                position,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;
    use crate::store::memory::MemBackend;

    fn session_with(titles: &[&str]) -> Session<MemBackend> {
        let mut session = Session::open(MemBackend::new()).unwrap();
        for title in titles {
            session.create(NotePayload::new(*title, "")).unwrap();
        }
        session
    }

    fn titles(session: &Session<MemBackend>) -> Vec<String> {
        session.notes().iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn deletes_selected_notes_by_original_position() {
        let mut session = session_with(&["A", "B", "C", "D"]);
        let result = run(
            &mut session,
            &[NoteSelector::Position(2), NoteSelector::Position(4)],
        )
        .unwrap();

        assert_eq!(titles(&session), vec!["A", "C"]);
        assert_eq!(result.affected_notes.len(), 2);
        assert_eq!(result.affected_notes[1].position, 4);
    }

    #[test]
    fn missing_notes_are_skipped_with_warning() {
        let mut session = session_with(&["A"]);
        let result = run(
            &mut session,
            &[NoteSelector::Position(5), NoteSelector::Position(1)],
        )
        .unwrap();

        assert!(session.notes().is_empty());
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
        assert_eq!(result.affected_notes.len(), 1);
    }

    #[test]
    fn duplicate_selectors_delete_once() {
        let mut session = session_with(&["A", "B"]);
        let id = session.notes()[0].id;
        let result = run(
            &mut session,
            &[NoteSelector::Position(1), NoteSelector::Id(id)],
        )
        .unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(titles(&session), vec!["B"]);
    }
}
