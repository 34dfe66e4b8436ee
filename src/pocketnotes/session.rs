//! # Session: the view layer
//!
//! A [`Session`] is what a screen holds on to. It owns the [`NoteStore`], the
//! current search query, the active tag filter, the note being edited (if any)
//! and the [`NoteEditor`] draft.
//!
//! ## Derived view
//!
//! The visible notes and the tag vocabulary are derived data. The session keeps
//! them in a [`FilteredView`] that is recomputed:
//!
//! - by a store subscription, whenever the collection changes, and
//! - directly, whenever the query or the tag selection changes.
//!
//! Readers therefore never filter on their own; they read [`Session::visible`]
//! and [`Session::all_tags`].
//!
//! ## Edit mode
//!
//! [`Session::begin_edit`] reseeds the editor from a note. [`Session::save`]
//! dispatches to create or update depending on the mode and leaves edit mode
//! after an update. Deleting the note being edited also leaves edit mode.

use crate::editor::NoteEditor;
use crate::error::Result;
use crate::filter::{available_tags, ActiveTags, NoteFilter};
use crate::model::{Note, NotePayload};
use crate::store::{Change, NoteBackend, NoteStore, Snapshot};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use uuid::Uuid;

/// Why nothing is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself is empty.
    NoNotes,
    /// Notes exist, but none passes the current filter.
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoNotes => "You have no notes yet. Create your first one!",
            EmptyState::NoMatches => {
                "No notes match your search filters. Try adjusting your search or tags."
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    pub visible: Vec<Note>,
    pub all_tags: Vec<String>,
    pub total: usize,
}

impl FilteredView {
    fn derive(snapshot: &Snapshot, filter: &NoteFilter) -> Self {
        Self {
            visible: filter.apply(snapshot).into_iter().cloned().collect(),
            all_tags: available_tags(snapshot),
            total: snapshot.len(),
        }
    }
}

/// State shared between the session and its store subscription.
#[derive(Debug, Default)]
struct ViewState {
    filter: NoteFilter,
    derived: FilteredView,
}

impl ViewState {
    fn refresh(&mut self, snapshot: &Snapshot) {
        self.derived = FilteredView::derive(snapshot, &self.filter);
    }
}

pub struct Session<B: NoteBackend> {
    store: NoteStore<B>,
    view: Rc<RefCell<ViewState>>,
    editing: Option<Note>,
    editor: NoteEditor,
}

impl<B: NoteBackend> Session<B> {
    pub fn new(mut store: NoteStore<B>) -> Self {
        let view = Rc::new(RefCell::new(ViewState::default()));
        view.borrow_mut().refresh(&store.snapshot());

        let listener_view = Rc::clone(&view);
        // Lives as long as the store, which the session owns
        store.subscribe(move |change: &Change| {
            listener_view.borrow_mut().refresh(&change.snapshot);
        });

        Self {
            store,
            view,
            editing: None,
            editor: NoteEditor::new(),
        }
    }

    /// Opens the store over `backend` and wraps it in a session.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(NoteStore::open(backend)?))
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn note(&self, id: &Uuid) -> Option<&Note> {
        self.store.get(id)
    }

    // --- Search & tag filters ---

    pub fn set_search(&mut self, query: &str) {
        self.view.borrow_mut().filter.set_query(query);
        self.refresh();
    }

    pub fn search_query(&self) -> String {
        self.view.borrow().filter.query().to_string()
    }

    /// Returns whether the tag is active afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let active = self.view.borrow_mut().filter.active_tags.toggle(tag);
        self.refresh();
        active
    }

    pub fn reset_tags(&mut self) {
        self.view.borrow_mut().filter.active_tags.clear();
        self.refresh();
    }

    pub fn active_tags(&self) -> ActiveTags {
        self.view.borrow().filter.active_tags.clone()
    }

    // --- Derived view ---

    pub fn view(&self) -> Ref<'_, FilteredView> {
        Ref::map(self.view.borrow(), |state| &state.derived)
    }

    pub fn visible(&self) -> Vec<Note> {
        self.view.borrow().derived.visible.clone()
    }

    pub fn all_tags(&self) -> Vec<String> {
        self.view.borrow().derived.all_tags.clone()
    }

    /// `Some` only when nothing is visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        let view = self.view.borrow();
        if !view.derived.visible.is_empty() {
            None
        } else if view.derived.total == 0 {
            Some(EmptyState::NoNotes)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    // --- Editing ---

    pub fn editor(&self) -> &NoteEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut NoteEditor {
        &mut self.editor
    }

    pub fn editing(&self) -> Option<&Note> {
        self.editing.as_ref()
    }

    /// Enters edit mode for `id`, reseeding the editor. Unknown ids change nothing.
    pub fn begin_edit(&mut self, id: &Uuid) -> bool {
        let Some(note) = self.store.get(id).cloned() else {
            return false;
        };
        self.editor.seed(Some(&note));
        self.editing = Some(note);
        true
    }

    /// Leaves edit mode and clears the draft.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
        self.stop_editing();
    }

    /// Saves the editor draft. In edit mode this updates the edited note and
    /// leaves edit mode; otherwise it creates a note. `Ok(None)` when the draft
    /// is blank or the edited note no longer exists.
    pub fn save(&mut self) -> Result<Option<Change>> {
        let Some(payload) = self.editor.submit() else {
            return Ok(None);
        };
        match self.editing.as_ref().map(|n| n.id) {
            Some(id) => {
                let change = self.store.update_note(&id, payload)?;
                self.stop_editing();
                Ok(change)
            }
            None => {
                let change = self.store.create_note(payload)?;
                self.editor.clear_after_create();
                Ok(Some(change))
            }
        }
    }

    /// Creates a note straight from a payload, bypassing the editor.
    pub fn create(&mut self, payload: NotePayload) -> Result<Change> {
        self.store.create_note(payload)
    }

    /// Deletes `id`; leaves edit mode if that note was being edited.
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<Change>> {
        let change = self.store.delete_note(id)?;
        if self.editing.as_ref().is_some_and(|n| &n.id == id) {
            self.cancel_edit();
        }
        Ok(change)
    }

    fn stop_editing(&mut self) {
        self.editing = None;
        self.editor.seed(None);
    }

    fn refresh(&mut self) {
        let snapshot = self.store.snapshot();
        self.view.borrow_mut().refresh(&snapshot);
    }
}
