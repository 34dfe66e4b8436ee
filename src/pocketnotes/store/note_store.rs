use super::NoteBackend;
use crate::error::Result;
use crate::model::{Note, NotePayload};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// An immutable view of the note collection at one point in time.
///
/// Cloning is cheap. The store copies the underlying list on write only while
/// some snapshot still refers to it, so holding on to one never observes later
/// mutations.
#[derive(Debug, Clone, Default)]
pub struct Snapshot(Arc<Vec<Note>>);

impl Snapshot {
    pub fn notes(&self) -> &[Note] {
        &self.0
    }
}

impl Deref for Snapshot {
    type Target = [Note];

    fn deref(&self) -> &[Note] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// The outcome of a successful mutation: what happened, to which note, and the
/// collection as it stands afterwards.
#[derive(Debug, Clone)]
pub struct Change {
    pub kind: ChangeKind,
    /// The note after creation/update, or as it was just before deletion.
    pub note: Note,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Change)>;

/// The owned note collection.
///
/// Single writer: every mutation updates memory, writes the whole collection
/// through the backend, then notifies listeners in registration order. When the
/// write fails the mutation is reverted and no listener runs.
pub struct NoteStore<B: NoteBackend> {
    backend: B,
    notes: Arc<Vec<Note>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<B: NoteBackend> NoteStore<B> {
    /// Loads the persisted collection once.
    pub fn open(backend: B) -> Result<Self> {
        let notes = backend.load()?;
        debug!(count = notes.len(), "note store opened");
        Ok(Self {
            backend,
            notes: Arc::new(notes),
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Arc::clone(&self.notes))
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Registers a listener called after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Change) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Appends a new note built from `payload`. The store accepts any payload,
    /// blank ones included.
    pub fn create_note(&mut self, payload: NotePayload) -> Result<Change> {
        let note = Note::new(payload);
        let pos = self.notes.len();
        Arc::make_mut(&mut self.notes).push(note.clone());
        debug!(id = %note.id, "note created");
        self.commit(ChangeKind::Created, note, Undo::Remove(pos))
    }

    /// Replaces title, content and tags of the note with `id`.
    /// Unknown ids are a no-op: nothing is written and nobody is notified.
    pub fn update_note(&mut self, id: &Uuid, payload: NotePayload) -> Result<Option<Change>> {
        let Some(pos) = self.position(id) else {
            warn!(%id, "update of unknown note ignored");
            return Ok(None);
        };
        let notes = Arc::make_mut(&mut self.notes);
        let previous = notes[pos].clone();
        notes[pos].apply(payload);
        let note = notes[pos].clone();
        debug!(%id, "note updated");
        self.commit(ChangeKind::Updated, note, Undo::Restore(pos, previous))
            .map(Some)
    }

    /// Removes the note with `id` for good. Unknown ids are a no-op.
    pub fn delete_note(&mut self, id: &Uuid) -> Result<Option<Change>> {
        let Some(pos) = self.position(id) else {
            warn!(%id, "delete of unknown note ignored");
            return Ok(None);
        };
        let note = Arc::make_mut(&mut self.notes).remove(pos);
        debug!(%id, "note deleted");
        self.commit(ChangeKind::Deleted, note.clone(), Undo::Insert(pos, note))
            .map(Some)
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    /// Persists the collection and notifies listeners. A failed save reverts the
    /// in-memory mutation, so memory always matches the last successful write.
    fn commit(&mut self, kind: ChangeKind, note: Note, undo: Undo) -> Result<Change> {
        if let Err(e) = self.backend.save(&self.notes) {
            warn!(id = %note.id, error = %e, "save failed, reverting");
            let notes = Arc::make_mut(&mut self.notes);
            match undo {
                Undo::Remove(pos) => {
                    notes.remove(pos);
                }
                Undo::Restore(pos, previous) => notes[pos] = previous,
                Undo::Insert(pos, previous) => notes.insert(pos, previous),
            }
            return Err(e);
        }
        let change = Change {
            kind,
            note,
            snapshot: self.snapshot(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
        Ok(change)
    }
}

/// How to take back a mutation whose save failed.
enum Undo {
    Remove(usize),
    Restore(usize, Note),
    Insert(usize, Note),
}
