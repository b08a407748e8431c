//! # Storage Layer
//!
//! This module defines the storage abstraction for gradz. The
//! [`CollectionStore`] trait is the seam between the tagging logic and whatever
//! actually holds the cards and notes.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other backends** (a live review app, a database) without changing
//!   the reconciler
//! - Keep the classification and tag-rewrite logic **decoupled** from
//!   persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON collection file with `cards` and `notes`
//!   arrays, reloaded per operation
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with fixtures
//!
//! ## Query Dialect
//!
//! `find_cards` takes a free-text selection query. The built-in stores support
//! a small dialect modeled on the original host's card search:
//!
//! - empty or whitespace: every card
//! - `tag:NAME`: cards whose note carries the tag (case-insensitive)
//! - `deck:NAME`: cards in the named deck (case-insensitive)
//! - anything else: case-insensitive substring over the note's fields
//!
//! The returned order is the store's card order and is observable: when a note
//! has several matching cards, the label of the last one wins.

use crate::error::Result;
use crate::model::{Card, CardId, Note, NoteId};

pub mod fs;
pub mod memory;

/// Abstract interface to a card/note collection.
///
/// The reconciler assumes exclusive access for the duration of one invocation;
/// implementations are not required to tolerate concurrent callers.
pub trait CollectionStore {
    /// Ordered ids of the cards matching a selection query (all cards when the
    /// query is empty)
    fn find_cards(&self, query: &str) -> Result<Vec<CardId>>;

    /// Get a card by id
    fn get_card(&self, id: CardId) -> Result<Card>;

    /// Get a note by id
    fn get_note(&self, id: NoteId) -> Result<Note>;

    /// Persist a note's current tag set (touches its updated_at stamp)
    fn update_note(&mut self, note: &Note) -> Result<()>;

    /// All notes in the collection
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// All cards in the collection
    fn list_cards(&self) -> Result<Vec<Card>>;
}

/// Parsed form of the selection query dialect shared by the built-in stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Query {
    All,
    Tag(String),
    Deck(String),
    Text(String),
}

impl Query {
    pub(crate) fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Query::All
        } else if let Some(name) = raw.strip_prefix("tag:") {
            Query::Tag(name.to_string())
        } else if let Some(name) = raw.strip_prefix("deck:") {
            Query::Deck(name.to_string())
        } else {
            Query::Text(raw.to_lowercase())
        }
    }

    pub(crate) fn matches(&self, card: &Card, note: Option<&Note>) -> bool {
        match self {
            Query::All => true,
            Query::Tag(name) => note
                .map(|n| n.tags.iter().any(|t| t.eq_ignore_ascii_case(name)))
                .unwrap_or(false),
            Query::Deck(name) => card.deck.eq_ignore_ascii_case(name),
            Query::Text(term) => note
                .map(|n| n.fields.iter().any(|f| f.to_lowercase().contains(term)))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_forms() {
        assert_eq!(Query::parse(""), Query::All);
        assert_eq!(Query::parse("   "), Query::All);
        assert_eq!(Query::parse("tag:leech"), Query::Tag("leech".to_string()));
        assert_eq!(Query::parse("deck:French"), Query::Deck("French".to_string()));
        assert_eq!(Query::parse("Bonjour"), Query::Text("bonjour".to_string()));
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let card = Card {
            id: CardId(1),
            note_id: NoteId(1),
            deck: "French".to_string(),
            lapses: 0,
            interval: 0,
            ease: 2500,
            reps: 0,
        };
        let mut note = Note::new(NoteId(1), vec!["Bonjour".to_string(), "Hello".to_string()]);
        note.tags = vec!["vocab".to_string()];

        assert!(Query::parse("bonjour").matches(&card, Some(&note)));
        assert!(Query::parse("tag:VOCAB").matches(&card, Some(&note)));
        assert!(Query::parse("deck:french").matches(&card, Some(&note)));
        assert!(!Query::parse("tag:grammar").matches(&card, Some(&note)));
        assert!(!Query::parse("goodbye").matches(&card, Some(&note)));
    }

    #[test]
    fn test_orphan_card_only_matches_all_and_deck() {
        let card = Card {
            id: CardId(1),
            note_id: NoteId(99),
            deck: "Default".to_string(),
            lapses: 0,
            interval: 0,
            ease: 2500,
            reps: 0,
        };
        assert!(Query::parse("").matches(&card, None));
        assert!(Query::parse("deck:Default").matches(&card, None));
        assert!(!Query::parse("tag:x").matches(&card, None));
        assert!(!Query::parse("anything").matches(&card, None));
    }
}
