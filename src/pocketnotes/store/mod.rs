//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`NoteBackend`]: raw persistence of the note collection. It knows *how* to
//!   read and write the whole ordered list, nothing else.
//! - [`note_store::NoteStore`]: the owned in-memory collection with the create,
//!   update and delete operations, id/timestamp assignment, and the listener
//!   registry. It writes through its backend after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, a single pretty-printed JSON array
//!   in `notes.json`, replaced atomically on each save.
//! - [`memory::MemBackend`]: in-memory storage for tests, with a save counter and
//!   an optional failure mode.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── notes.json    # every note, in insertion order
//! └── config.json   # NotesConfig
//! ```
//!
//! There is no schema version and no migration: the file holds whatever shape
//! [`crate::model::Note`] serializes to.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;
pub mod note_store;

pub use note_store::{Change, ChangeKind, NoteStore, Snapshot, SubscriptionId};

/// Abstract interface for note persistence.
///
/// The collection is always read and written as a whole.
pub trait NoteBackend {
    /// Load the persisted collection. Absence of persisted data yields an empty vec.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the persisted collection with `notes`.
    fn save(&self, notes: &[Note]) -> Result<()>;
}
