use super::NoteBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Vec<Note>>,
    saves: Cell<usize>,
    fail_saves: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding `notes`, as if they had been persisted earlier.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RefCell::new(notes),
            ..Self::default()
        }
    }

    /// A backend whose every save fails, standing in for a full or missing disk.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Keeps the current contents but makes every later save fail.
    pub fn into_failing(self) -> Self {
        Self {
            fail_saves: true,
            ..self
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What the last successful save wrote.
    pub fn persisted(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }
}

impl NoteBackend for MemBackend {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if self.fail_saves {
            return Err(NotesError::Store("storage unavailable".to_string()));
        }
        *self.notes.borrow_mut() = notes.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NotePayload;
    use crate::store::NoteStore;

    pub struct StoreFixture {
        pub store: NoteStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::open(MemBackend::new()).unwrap(),
            }
        }

        pub fn with_note(mut self, title: &str, content: &str, tags: &[&str]) -> Self {
            let payload = NotePayload::new(title, content).with_tags(tags.iter().copied());
            self.store.create_note(payload).unwrap();
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let payload = NotePayload::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                );
                self.store.create_note(payload).unwrap();
            }
            self
        }
    }
}
