//! Session: the selection and edit buffer over a note store.

use crate::domain::{Note, NoteId};
use crate::store::confirm::Confirm;
use crate::store::mirror::Mirror;
use crate::store::projection::project;
use crate::store::store::{NoteStore, StoreResult, UpdateFields};

/// Provisional title/content for the open note.
///
/// The draft holds text being edited before it is committed to the
/// store, so a store (and mirror) write happens once per commit rather
/// than once per keystroke. Switching the selection discards any
/// uncommitted draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    note_id: NoteId,
    title: String,
    content: String,
}

impl Draft {
    fn from_note(note: &Note) -> Self {
        Self {
            note_id: note.id().clone(),
            title: note.title().to_string(),
            content: note.content().to_string(),
        }
    }

    /// Returns the id of the note this draft edits.
    pub fn note_id(&self) -> &NoteId {
        &self.note_id
    }

    /// Returns the buffered title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the buffered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the buffered title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the buffered content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    fn differs_from(&self, note: &Note) -> bool {
        self.title != note.title() || self.content != note.content()
    }
}

/// Owns a note store plus the transient UI state around it: the search
/// query, the selected note id, and the edit buffer for that note.
///
/// All mutations flow through the session so the selection can be
/// reconciled after each one:
///
/// - no selection + non-empty visible list: select the first visible note
/// - selection pointing at a deleted note: reselect the first visible
///   note, or clear the selection if nothing is visible
/// - deleting the selected note specifically: prefer the note now
///   occupying its position in the visible list, then the first visible
///   note, then no selection
pub struct Session<M: Mirror> {
    store: NoteStore<M>,
    query: String,
    selected: Option<NoteId>,
    draft: Option<Draft>,
}

impl<M: Mirror> Session<M> {
    /// Wraps a store, selecting the first visible note if any.
    pub fn new(store: NoteStore<M>) -> Self {
        let mut session = Self {
            store,
            query: String::new(),
            selected: None,
            draft: None,
        };
        session.reconcile();
        session
    }

    /// Returns the underlying store (read-only; mutate via the session).
    pub fn store(&self) -> &NoteStore<M> {
        &self.store
    }

    /// Returns the current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the search query and reconciles the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reconcile();
    }

    /// Returns the selected note's id, if any.
    pub fn selected(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Returns the selected note, if any.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.store.get(id))
    }

    /// Returns the projection of the collection for the current query.
    pub fn visible(&self) -> Vec<&Note> {
        project(self.store.notes(), &self.query)
    }

    /// Selects the given note. Returns false if it is not in the
    /// collection (the previous selection is kept).
    pub fn select(&mut self, id: &NoteId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.set_selected(Some(id.clone()));
        true
    }

    /// Creates a note and selects it.
    pub fn create(&mut self, fields: UpdateFields) -> StoreResult<NoteId> {
        match self.store.create_with(fields) {
            Ok(id) => {
                self.set_selected(Some(id.clone()));
                Ok(id)
            }
            Err(e) => {
                // The note is in memory despite the failed write.
                self.reconcile();
                Err(e)
            }
        }
    }

    /// Merges fields into a note, then reconciles.
    pub fn update(&mut self, id: &NoteId, fields: UpdateFields) -> StoreResult<bool> {
        let result = self.store.update(id, fields);
        self.reconcile();
        result
    }

    /// Flips a note's pinned state, then reconciles.
    pub fn toggle_pin(&mut self, id: &NoteId) -> StoreResult<bool> {
        let result = self.store.toggle_pin(id);
        self.reconcile();
        result
    }

    /// Adds a tag to a note, then reconciles.
    pub fn add_tag(&mut self, id: &NoteId, tag: &str) -> StoreResult<bool> {
        let result = self.store.add_tag(id, tag);
        self.reconcile();
        result
    }

    /// Removes a tag from a note, then reconciles.
    pub fn remove_tag(&mut self, id: &NoteId, tag: &str) -> StoreResult<bool> {
        let result = self.store.remove_tag(id, tag);
        self.reconcile();
        result
    }

    /// Removes a note after confirmation and reconciles the selection.
    ///
    /// Deleting the selected note applies the position-preserving rule:
    /// the note now occupying the deleted note's place in the visible
    /// list becomes the selection, falling back to the first visible
    /// note, then to no selection.
    pub fn remove(&mut self, id: &NoteId, confirm: &dyn Confirm) -> StoreResult<bool> {
        let was_selected = self.selected.as_ref() == Some(id);
        let old_position = if was_selected {
            self.visible_ids().iter().position(|v| v == id)
        } else {
            None
        };

        let result = self.store.remove_confirmed(id, confirm);
        // An Err means the mirror write failed after the in-memory
        // removal; the selection has to move in that case too.
        let removed = match &result {
            Ok(removed) => *removed,
            Err(_) => true,
        };

        if removed && was_selected {
            let new_visible = self.visible_ids();
            let next = old_position
                .and_then(|i| new_visible.get(i).cloned())
                .or_else(|| new_visible.first().cloned());
            self.set_selected(next);
        } else {
            self.reconcile();
        }
        result
    }

    /// Returns the edit buffer for the selected note, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Returns the edit buffer mutably for staging changes.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Commits the draft to the store.
    ///
    /// A draft whose title and content match the note is a no-op: no
    /// store write, no `updated` bump. Returns whether a write happened.
    pub fn commit_draft(&mut self) -> StoreResult<bool> {
        let Some(draft) = &self.draft else {
            return Ok(false);
        };
        let Some(note) = self.store.get(draft.note_id()) else {
            return Ok(false);
        };
        if !draft.differs_from(note) {
            return Ok(false);
        }

        let id = draft.note_id().clone();
        let fields = UpdateFields {
            title: Some(draft.title.clone()),
            content: Some(draft.content.clone()),
        };
        let result = self.store.update(&id, fields);
        // Re-seed the draft from the committed note so normalization
        // (e.g. a blank title falling back to the default) is reflected.
        self.sync_draft();
        result
    }

    fn visible_ids(&self) -> Vec<NoteId> {
        self.visible().iter().map(|n| n.id().clone()).collect()
    }

    fn reconcile(&mut self) {
        let valid = self
            .selected
            .as_ref()
            .is_some_and(|id| self.store.contains(id));
        if !valid {
            let first = self.visible_ids().into_iter().next();
            self.set_selected(first);
        }
    }

    // Selection changes re-seed the draft; anything uncommitted on the
    // previously open note is discarded.
    fn set_selected(&mut self, id: Option<NoteId>) {
        if id != self.selected {
            self.selected = id;
            self.sync_draft();
        }
    }

    fn sync_draft(&mut self) {
        self.draft = self
            .selected
            .as_ref()
            .and_then(|id| self.store.get(id))
            .map(Draft::from_note);
    }
}
