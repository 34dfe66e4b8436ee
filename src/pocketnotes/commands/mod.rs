//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule. Commands drive a
//! [`Session`](crate::session::Session) the way a person would drive the screen:
//! they fill in the editor, set the search box, toggle tags, and press save.
//! That keeps one code path for every client, so the editor's rules (tag
//! normalization, blank-draft refusal, create vs. edit) hold for the CLI too.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_notes`: notes that were created, updated or deleted
//! - `listed_notes`: notes to display, with their positions
//! - `tags`: tag vocabulary with usage counts (for `tags`)
//! - `config`: configuration data (for `config`)
//! - `empty_state`: why a listing came back empty
//! - `messages`: structured messages with levels
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note through the editor
//! - [`update`]: Edit an existing note
//! - [`delete`]: Delete notes
//! - [`list`]: Search and tag-filter the collection
//! - [`view`]: Retrieve whole notes
//! - [`tags`]: Tag vocabulary
//! - [`config`]: Manage configuration

use crate::config::NotesConfig;
use crate::index::DisplayNote;
use crate::session::EmptyState;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod tags;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct NotesPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A tag and how many notes carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub tags: Vec<TagCount>,
    pub config: Option<NotesConfig>,
    pub empty_state: Option<EmptyState>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagCount>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: NotesConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Draft fields for a new note, as a client collected them.
///
/// `tags` holds raw tag input; each entry is typed into the editor's tag field,
/// so `"work, Rust"` yields two tags.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Changes to an existing note. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Raw tag input appended to the note's tags.
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    /// Drop every existing tag before adding `add_tags`.
    pub clear_tags: bool,
}
