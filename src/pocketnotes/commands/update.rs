use crate::commands::{CmdMessage, CmdResult, NoteEdit};
use crate::error::{NotesError, Result};
use crate::index::{position_of, DisplayNote, NoteSelector};
use crate::session::Session;
use crate::store::NoteBackend;
use crate::tags::normalize_tag;

pub fn run<B: NoteBackend>(
    session: &mut Session<B>,
    selector: &NoteSelector,
    edit: NoteEdit,
) -> Result<CmdResult> {
    let id = selector.resolve(session.notes())?.id;
    session.begin_edit(&id);

    let editor = session.editor_mut();
    if let Some(title) = edit.title {
        editor.set_title(title);
    }
    if let Some(content) = edit.content {
        editor.set_content(content);
    }
    if edit.clear_tags {
        editor.clear_tags();
    }
    for tag in edit.remove_tags.iter().filter_map(|t| normalize_tag(t)) {
        editor.remove_tag(&tag);
    }
    for input in &edit.add_tags {
        editor.type_tags(input);
    }

    if !editor.can_save() {
        session.cancel_edit();
        return Err(NotesError::Api(
            "Nothing to save: title and content are both blank".into(),
        ));
    }

    let mut result = CmdResult::default();
    match session.save()? {
        Some(change) => {
            let note = change.note;
            let position = position_of(session.notes(), &note.id).unwrap_or_default();
            result.add_message(CmdMessage::success(format!(
                "Note updated ({}): {}",
                position,
                note.display_title()
            )));
            result.affected_notes.push(DisplayNote { note, position });
        }
        None => result.add_message(CmdMessage::warning(format!(
            "Note {} no longer exists, nothing updated",
            selector
        ))),
    }
    Ok(result)
}
