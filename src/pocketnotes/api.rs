//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every client.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → [`NoteSelector`] values)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! `NotesApi<B: NoteBackend>` is generic over the storage backend:
//! - Production: `NotesApi<FileBackend>`
//! - Testing: `NotesApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::index::{parse_selectors, NoteSelector};
use crate::session::Session;
use crate::store::NoteBackend;
use std::str::FromStr;

pub struct NotesApi<B: NoteBackend> {
    session: Session<B>,
    paths: commands::NotesPaths,
}

impl<B: NoteBackend> NotesApi<B> {
    pub fn new(session: Session<B>, paths: commands::NotesPaths) -> Self {
        Self { session, paths }
    }

    pub fn create_note(&mut self, draft: commands::NoteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.session, draft)
    }

    pub fn update_note(
        &mut self,
        selector: &str,
        edit: commands::NoteEdit,
    ) -> Result<commands::CmdResult> {
        let selector = NoteSelector::from_str(selector).map_err(crate::error::NotesError::Api)?;
        commands::update::run(&mut self.session, &selector, edit)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.session, &selectors)
    }

    pub fn list_notes<S: AsRef<str>>(
        &mut self,
        query: &str,
        tags: &[S],
    ) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.session, query, tags)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.session, &selectors)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.session)
    }

    pub fn suggest_tags(&self, partial: &str, limit: usize) -> Result<commands::CmdResult> {
        commands::tags::suggest(&self.session, partial, limit)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn session(&self) -> &Session<B> {
        &self.session
    }

    pub fn paths(&self) -> &commands::NotesPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, MessageLevel, NoteDraft, NoteEdit, NotesPaths, TagCount,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    fn api() -> NotesApi<MemBackend> {
        let session = Session::open(MemBackend::new()).unwrap();
        let paths = NotesPaths {
            data_dir: std::env::temp_dir().join("pocketnotes-api-test"),
        };
        NotesApi::new(session, paths)
    }

    fn draft(title: &str, tags: &[&str]) -> NoteDraft {
        NoteDraft {
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn dispatches_create_list_and_delete() {
        let mut api = api();
        api.create_note(draft("Trip", &["travel"])).unwrap();
        api.create_note(draft("Groceries", &["home"])).unwrap();

        let listed = api.list_notes("", &["home"]).unwrap();
        assert_eq!(listed.listed_notes.len(), 1);

        let deleted = api.delete_notes(&["1"]).unwrap();
        assert_eq!(deleted.affected_notes[0].note.title, "Trip");
        assert_eq!(api.session().notes().len(), 1);
    }

    #[test]
    fn update_accepts_id_prefix() {
        let mut api = api();
        api.create_note(draft("Old", &[])).unwrap();
        // Keep the dash so an all-digit prefix is not read as a position
        let prefix = api.session().notes()[0].id.to_string()[..9].to_string();

        let edit = NoteEdit {
            title: Some("New".into()),
            ..Default::default()
        };
        api.update_note(&prefix, edit).unwrap();

        assert_eq!(api.session().notes()[0].title, "New");
    }

    #[test]
    fn rejects_malformed_selectors() {
        let mut api = api();
        assert!(api.view_notes(&["not-a-note"]).is_err());
        assert!(api.update_note("?", NoteEdit::default()).is_err());
    }
}
