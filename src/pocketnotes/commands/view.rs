use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{display_notes, NoteSelector};
use crate::session::Session;
use crate::store::NoteBackend;

pub fn run<B: NoteBackend>(session: &Session<B>, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let notes = session.notes();
    let selected = selectors
        .iter()
        .map(|selector| selector.resolve(notes))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_notes(display_notes(notes, selected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotePayload;
    use crate::store::memory::MemBackend;

    #[test]
    fn returns_selected_notes_in_request_order() {
        let mut session = Session::open(MemBackend::new()).unwrap();
        session.create(NotePayload::new("A", "alpha")).unwrap();
        session.create(NotePayload::new("B", "beta")).unwrap();

        let result = run(
            &session,
            &[NoteSelector::Position(2), NoteSelector::Position(1)],
        )
        .unwrap();

        let contents: Vec<_> = result
            .listed_notes
            .iter()
            .map(|d| (d.position, d.note.content.as_str()))
            .collect();
        assert_eq!(contents, vec![(2, "beta"), (1, "alpha")]);
    }

    #[test]
    fn fails_on_unknown_selector() {
        let session = Session::open(MemBackend::new()).unwrap();
        assert!(run(&session, &[NoteSelector::Position(1)]).is_err());
    }
}
