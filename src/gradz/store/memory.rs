use super::{CollectionStore, Query};
use crate::error::{GradzError, Result};
use crate::model::{Card, CardId, Note, NoteId};
use chrono::Utc;
use std::collections::HashMap;

/// In-memory collection for tests.
///
/// Cards keep their insertion order, which is the order `find_cards` returns
/// them in. Tests rely on that to pin down last-write-wins behavior.
#[derive(Default)]
pub struct InMemoryStore {
    cards: Vec<Card>,
    notes: HashMap<NoteId, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_note(&mut self, note: Note) {
        self.notes.insert(note.id, note);
    }

    pub fn insert_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl CollectionStore for InMemoryStore {
    fn find_cards(&self, query: &str) -> Result<Vec<CardId>> {
        let query = Query::parse(query);
        Ok(self
            .cards
            .iter()
            .filter(|c| query.matches(c, self.notes.get(&c.note_id)))
            .map(|c| c.id)
            .collect())
    }

    fn get_card(&self, id: CardId) -> Result<Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(GradzError::CardNotFound(id))
    }

    fn get_note(&self, id: NoteId) -> Result<Note> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(GradzError::NoteNotFound(id))
    }

    fn update_note(&mut self, note: &Note) -> Result<()> {
        if !self.notes.contains_key(&note.id) {
            return Err(GradzError::NoteNotFound(note.id));
        }
        let mut stored = note.clone();
        stored.updated_at = Utc::now();
        self.notes.insert(stored.id, stored);
        Ok(())
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self.notes.values().cloned().collect();
        notes.sort_by_key(|n| n.id);
        Ok(notes)
    }

    fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for stores pre-populated with notes and cards.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, id: i64, tags: &[&str]) -> Self {
            let mut note = Note::new(
                NoteId(id),
                vec![format!("Front {}", id), format!("Back {}", id)],
            );
            note.tags = tags.iter().map(|t| t.to_string()).collect();
            self.store.insert_note(note);
            self
        }

        /// A reviewed card with the given stats (reps defaults to a nonzero
        /// count; use `with_unreviewed_card` for reps == 0).
        pub fn with_card(
            mut self,
            id: i64,
            note_id: i64,
            lapses: u32,
            interval: u32,
            ease: u32,
        ) -> Self {
            self.store.insert_card(Card {
                id: CardId(id),
                note_id: NoteId(note_id),
                deck: "Default".to_string(),
                lapses,
                interval,
                ease,
                reps: 10,
            });
            self
        }

        pub fn with_unreviewed_card(mut self, id: i64, note_id: i64) -> Self {
            self.store.insert_card(Card {
                id: CardId(id),
                note_id: NoteId(note_id),
                deck: "Default".to_string(),
                lapses: 0,
                interval: 0,
                ease: 2500,
                reps: 0,
            });
            self
        }
    }
}
