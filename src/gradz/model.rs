use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card in the host collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a note in the host collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single reviewable card with its scheduling statistics.
///
/// `ease` is the scaled ease factor the host stores: 10x the displayed
/// percentage, so a displayed 250% is stored as 2500.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub note_id: NoteId,
    pub deck: String,
    /// Times this card was forgotten after being learned
    pub lapses: u32,
    /// Days until the next scheduled review
    pub interval: u32,
    /// Scaled ease factor (2500 = 250%)
    pub ease: u32,
    /// Total review count; zero means the card was never reviewed
    pub reps: u32,
}

/// The unit of content owning one or more cards and the tag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub fields: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stamped by the store on every persisted mutation. Hand-authored
    /// collection files may omit it.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: NoteId, fields: Vec<String>) -> Self {
        Self {
            id,
            fields,
            tags: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The difficulty tag currently on this note, if any.
    ///
    /// After reconciliation a note carries at most one; if an external process
    /// attached several, the first in tag order is reported.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.tags.iter().find_map(|t| Difficulty::from_tag(t))
    }
}

/// The closed five-label difficulty vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    VeryHard,
    Hard,
    Medium,
    Easy,
    VeryEasy,
}

impl Difficulty {
    /// Every tag string this tool owns on a note.
    pub const TAGS: [&'static str; 5] = ["VeryHard", "Hard", "Medium", "Easy", "VeryEasy"];

    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::VeryHard => "VeryHard",
            Difficulty::Hard => "Hard",
            Difficulty::Medium => "Medium",
            Difficulty::Easy => "Easy",
            Difficulty::VeryEasy => "VeryEasy",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "VeryHard" => Some(Difficulty::VeryHard),
            "Hard" => Some(Difficulty::Hard),
            "Medium" => Some(Difficulty::Medium),
            "Easy" => Some(Difficulty::Easy),
            "VeryEasy" => Some(Difficulty::VeryEasy),
            _ => None,
        }
    }

    pub fn is_difficulty_tag(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_roundtrip() {
        for tag in Difficulty::TAGS {
            let d = Difficulty::from_tag(tag).unwrap();
            assert_eq!(d.tag(), tag);
        }
        assert_eq!(Difficulty::from_tag("leech"), None);
    }

    #[test]
    fn test_note_difficulty_ignores_foreign_tags() {
        let mut note = Note::new(NoteId(1), vec!["front".into(), "back".into()]);
        note.tags = vec!["vocab".to_string(), "Easy".to_string()];
        assert_eq!(note.difficulty(), Some(Difficulty::Easy));
        assert!(note.has_tag("vocab"));
        assert!(!note.has_tag("Hard"));
    }

    #[test]
    fn test_note_deserializes_without_optional_fields() {
        // Hand-authored collection files can leave out tags and updated_at.
        let note: Note =
            serde_json::from_str(r#"{"id": 5, "fields": ["Front", "Back"]}"#).unwrap();
        assert_eq!(note.id, NoteId(5));
        assert!(note.tags.is_empty());
        assert!(note.updated_at <= Utc::now());
    }

    #[test]
    fn test_note_without_difficulty() {
        let note = Note::new(NoteId(2), vec!["front".into()]);
        assert_eq!(note.difficulty(), None);
    }
}
