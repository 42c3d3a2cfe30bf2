//! NoteStore: the canonical note collection and its durable mirror.

use crate::domain::{Note, NoteId, Tag};
use crate::store::confirm::Confirm;
use crate::store::mirror::{Mirror, MirrorError};
use chrono::Utc;
use thiserror::Error;

/// Errors that can occur during store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The mirror write failed.
    ///
    /// The in-memory mutation has already been applied and is retained;
    /// only the durable copy is stale. Callers decide how loudly to
    /// report this.
    #[error("failed to persist note collection: {0}")]
    Mirror(#[from] MirrorError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Partial fields merged into a note by [`NoteStore::update`].
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// The canonical, mutable note collection.
///
/// The store owns the only mutable copy of the collection. Every
/// mutation applies in memory, bumps the revision counter, then writes
/// the whole collection to the mirror. The revision counter is the
/// "collection changed" notification: consumers holding derived state
/// (projection, selection) re-derive when it moves.
///
/// Operations targeting an id that is not in the collection are silent
/// no-ops, never errors.
pub struct NoteStore<M: Mirror> {
    notes: Vec<Note>,
    mirror: M,
    revision: u64,
}

impl<M: Mirror> NoteStore<M> {
    /// Loads the collection from the mirror.
    ///
    /// The mirror's read is fail-soft, so absent or corrupt data yields
    /// an empty store. Should the mirror ever hand back duplicate ids
    /// (a hand-edited file), only the first occurrence of each is kept.
    pub fn load(mirror: M) -> Self {
        let read = mirror.read();
        let mut notes: Vec<Note> = Vec::with_capacity(read.len());
        for note in read {
            if !notes.iter().any(|n| n.id() == note.id()) {
                notes.push(note);
            }
        }
        Self {
            notes,
            mirror,
            revision: 0,
        }
    }

    /// Returns the collection in store order (newest-created first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Monotonic counter bumped on every mutation.
    ///
    /// Advances even when the mirror write fails, since the in-memory
    /// collection changed and derived state must be recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns true if a note with the given id is in the collection.
    pub fn contains(&self, id: &NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Returns all notes whose id starts with `prefix`.
    pub fn matching_prefix(&self, prefix: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().matches_prefix(prefix))
            .collect()
    }

    /// Returns the mirror.
    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Creates a note with defaulted fields, prepended to the collection.
    ///
    /// Returns the new note's id, which callers treat as the implicit
    /// new selection.
    pub fn create(&mut self) -> StoreResult<NoteId> {
        self.create_with(UpdateFields::default())
    }

    /// Creates a note and merges the given fields in the same mutation,
    /// so only a single mirror write happens.
    pub fn create_with(&mut self, fields: UpdateFields) -> StoreResult<NoteId> {
        let now = Utc::now();
        let mut note = Note::create(now);
        if let Some(title) = &fields.title {
            note.set_title(title, now);
        }
        if let Some(content) = &fields.content {
            note.set_content(content, now);
        }
        let id = note.id().clone();
        self.notes.insert(0, note);
        self.persist()?;
        Ok(id)
    }

    /// Merges the given fields into the note with the matching id.
    ///
    /// Returns true if the note existed. An absent id is a silent no-op
    /// with no mirror write.
    pub fn update(&mut self, id: &NoteId, fields: UpdateFields) -> StoreResult<bool> {
        let now = Utc::now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(false);
        };
        if let Some(title) = &fields.title {
            note.set_title(title, now);
        }
        if let Some(content) = &fields.content {
            note.set_content(content, now);
        }
        self.persist()?;
        Ok(true)
    }

    /// Removes the note with the matching id, without confirmation.
    ///
    /// Prefer [`remove_confirmed`](Self::remove_confirmed) on user-facing
    /// paths; delete is irreversible.
    pub fn remove(&mut self, id: &NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id() != id);
        if self.notes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Removes the note only if the confirmation collaborator approves.
    ///
    /// Returns true only when the note existed and was removed.
    pub fn remove_confirmed(&mut self, id: &NoteId, confirm: &dyn Confirm) -> StoreResult<bool> {
        let Some(note) = self.get(id) else {
            return Ok(false);
        };
        let message = format!("Delete note '{}'? This cannot be undone.", note.title());
        if !confirm.confirm_destructive(&message) {
            return Ok(false);
        }
        self.remove(id)
    }

    /// Flips the pinned state of the note with the matching id.
    pub fn toggle_pin(&mut self, id: &NoteId) -> StoreResult<bool> {
        let now = Utc::now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(false);
        };
        note.toggle_pin(now);
        self.persist()?;
        Ok(true)
    }

    /// Adds a tag to the note with the matching id.
    ///
    /// Empty or whitespace-only tags are a no-op. Re-adding an existing
    /// tag leaves the set unchanged but still counts as an update (the
    /// note's `updated` timestamp moves) and persists.
    pub fn add_tag(&mut self, id: &NoteId, tag: &str) -> StoreResult<bool> {
        let Ok(tag) = Tag::new(tag) else {
            return Ok(false);
        };
        let now = Utc::now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(false);
        };
        note.add_tag(tag, now);
        self.persist()?;
        Ok(true)
    }

    /// Removes a tag from the note with the matching id.
    ///
    /// Removing a tag the note does not carry is a complete no-op: no
    /// `updated` bump and no mirror write.
    pub fn remove_tag(&mut self, id: &NoteId, tag: &str) -> StoreResult<bool> {
        let Ok(tag) = Tag::new(tag) else {
            return Ok(false);
        };
        let now = Utc::now();
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return Ok(false);
        };
        if !note.remove_tag(&tag, now) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.revision += 1;
        self.mirror.write(&self.notes)?;
        Ok(())
    }
}
