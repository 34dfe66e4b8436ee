use crate::commands::{CmdMessage, CmdResult, NoteDraft};
use crate::error::{NotesError, Result};
use crate::index::{position_of, DisplayNote};
use crate::session::Session;
use crate::store::NoteBackend;

pub fn run<B: NoteBackend>(session: &mut Session<B>, draft: NoteDraft) -> Result<CmdResult> {
    if session.editing().is_some() {
        session.cancel_edit();
    }

    let editor = session.editor_mut();
    editor.seed(None);
    editor.set_title(draft.title);
    editor.set_content(draft.content);
    for input in &draft.tags {
        editor.type_tags(input);
    }

    if !editor.can_save() {
        editor.cancel();
        return Err(NotesError::Api(
            "Nothing to save: title and content are both blank".into(),
        ));
    }

    let Some(change) = session.save()? else {
        return Ok(CmdResult::default());
    };

    let note = change.note;
    let position = position_of(session.notes(), &note.id).unwrap_or(session.notes().len());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        position,
        note.display_title()
    )));
    Ok(result.with_affected_notes(vec![DisplayNote { note, position }]))
}
