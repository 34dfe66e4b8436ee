use crate::tags::normalize_tags;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a user submits when creating or editing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NotePayload {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when both title and content are blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a new note from a payload: fresh id, both timestamps set to now,
    /// tags normalized.
    pub fn new(payload: NotePayload) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: payload.title,
            content: payload.content,
            tags: normalize_tags(payload.tags),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title, content and tags wholesale and bumps `updated_at`.
    /// `id` and `created_at` are left alone.
    pub fn apply(&mut self, payload: NotePayload) {
        self.title = payload.title;
        self.content = payload.content;
        self.tags = normalize_tags(payload.tags);
        self.touch();
    }

    /// Refreshes `updated_at`, keeping it strictly increasing even when the
    /// clock has not ticked since the last write.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Title for listings; falls back to the first content line for untitled notes.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if !title.is_empty() {
            return title;
        }
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_normalizes_tags() {
        let note = Note::new(NotePayload::new("Trip", "").with_tags([" Travel", "travel", ""]));
        assert_eq!(note.tags, vec!["travel"]);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn apply_keeps_identity() {
        let mut note = Note::new(NotePayload::new("Old", "old body"));
        let id = note.id;
        let created = note.created_at;
        let before = note.updated_at;

        note.apply(NotePayload::new("New", "new body").with_tags(["A"]));

        assert_eq!(note.id, id);
        assert_eq!(note.created_at, created);
        assert!(note.updated_at > before);
        assert_eq!(note.title, "New");
        assert_eq!(note.content, "new body");
        assert_eq!(note.tags, vec!["a"]);
    }

    #[test]
    fn touch_is_strictly_increasing() {
        let mut note = Note::new(NotePayload::new("T", ""));
        let mut last = note.updated_at;
        for _ in 0..5 {
            note.touch();
            assert!(note.updated_at > last);
            last = note.updated_at;
        }
    }

    #[test]
    fn blank_payload_detection() {
        assert!(NotePayload::new("  ", "\n\t").is_blank());
        assert!(!NotePayload::new("", "body").is_blank());
        assert!(!NotePayload::new("title", "").is_blank());
    }

    #[test]
    fn display_title_falls_back_to_content() {
        let note = Note::new(NotePayload::new("", "\n  first line\nsecond"));
        assert_eq!(note.display_title(), "first line");
        let note = Note::new(NotePayload::new(" Named ", "body"));
        assert_eq!(note.display_title(), "Named");
    }

    #[test]
    fn serializes_camel_case() {
        let note = Note::new(NotePayload::new("T", "C"));
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
