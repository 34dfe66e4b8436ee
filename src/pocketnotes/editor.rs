//! # Note Editor
//!
//! The draft state behind the create/edit form, independent of any widget toolkit.
//!
//! The editor has two modes. In [`EditorMode::Create`] the draft starts empty and is
//! cleared once the note it produced has been stored
//! ([`NoteEditor::clear_after_create`]), so the form is ready for the next note. A
//! failed save keeps the draft. In [`EditorMode::Edit`] the draft is seeded from an
//! existing note and the caller decides what happens after saving (usually it
//! leaves edit mode).
//!
//! ## Tag input
//!
//! Tags are typed into a pending input and committed with `Enter` or `,`. A
//! committed tag is trimmed and lowercased, and ignored if blank or already
//! present. `Backspace` on an empty pending input removes the last tag.
//!
//! ## Save gating
//!
//! [`NoteEditor::can_save`] is false while both title and content are blank, and
//! [`NoteEditor::submit`] refuses to produce a payload in that state.

use crate::model::{Note, NotePayload};
use crate::tags::normalize_tag;
use uuid::Uuid;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Key presses the tag input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Char(char),
    Enter,
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    mode: EditorMode,
    source: Option<Uuid>,
    title: String,
    content: String,
    tags: Vec<String>,
    tag_input: String,
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditor {
    /// An empty editor in create mode.
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            source: None,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
        }
    }

    /// An editor in edit mode, seeded from `note`.
    pub fn for_note(note: &Note) -> Self {
        let mut editor = Self::new();
        editor.seed(Some(note));
        editor
    }

    /// Switches the source note. Every draft field, pending tag input included,
    /// is reset to match the new source; unsaved edits are discarded.
    /// `None` switches back to an empty create-mode draft.
    pub fn seed(&mut self, note: Option<&Note>) {
        match note {
            Some(note) => {
                self.mode = EditorMode::Edit;
                self.source = Some(note.id);
                self.title = note.title.clone();
                self.content = note.content.clone();
                self.tags = note.tags.clone();
            }
            None => {
                self.mode = EditorMode::Create;
                self.source = None;
                self.title.clear();
                self.content.clear();
                self.tags.clear();
            }
        }
        self.tag_input.clear();
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Id of the note being edited, if any.
    pub fn source(&self) -> Option<Uuid> {
        self.source
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_tag_input(&mut self, input: impl Into<String>) {
        self.tag_input = input.into();
    }

    /// Handles a key press in the tag input.
    pub fn key(&mut self, key: EditorKey) {
        match key {
            EditorKey::Enter | EditorKey::Char(',') => self.commit_tag(),
            EditorKey::Backspace => {
                if self.tag_input.is_empty() {
                    self.tags.pop();
                } else {
                    self.tag_input.pop();
                }
            }
            EditorKey::Char(c) => self.tag_input.push(c),
        }
    }

    /// Types `text` into the tag input, then commits whatever is left pending.
    /// `"work, Rust"` ends up adding `work` and `rust`.
    pub fn type_tags(&mut self, text: &str) {
        for c in text.chars() {
            self.key(EditorKey::Char(c));
        }
        self.commit_tag();
    }

    /// Commits the pending tag input and clears it.
    pub fn commit_tag(&mut self) {
        if let Some(tag) = normalize_tag(&self.tag_input) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self.tag_input.clear();
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Adds a tag picked from the suggestions.
    pub fn add_suggestion(&mut self, tag: &str) {
        if let Some(tag) = normalize_tag(tag) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Known tags not yet on the draft that contain the pending input, at most `limit`.
    pub fn suggestions<'a>(&self, existing_tags: &'a [String], limit: usize) -> Vec<&'a str> {
        let needle = self.tag_input.to_lowercase();
        existing_tags
            .iter()
            .filter(|tag| !self.tags.contains(tag) && tag.contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }

    /// Produces the payload to save, or `None` while the draft is blank.
    /// The draft itself is left as is.
    pub fn submit(&self) -> Option<NotePayload> {
        if !self.can_save() {
            return None;
        }
        Some(NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        })
    }

    /// Clears a create-mode draft after its note was stored. Edit mode is untouched.
    pub fn clear_after_create(&mut self) {
        if self.mode == EditorMode::Create {
            self.clear_draft();
        }
    }

    /// Discards the draft without changing mode.
    pub fn cancel(&mut self) {
        self.clear_draft();
    }

    fn clear_draft(&mut self) {
        self.title.clear();
        self.content.clear();
        self.tags.clear();
        self.tag_input.clear();
    }
}
