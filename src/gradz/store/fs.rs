use super::{CollectionStore, Query};
use crate::error::{GradzError, Result};
use crate::model::{Card, CardId, Note, NoteId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of a collection file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Collection storage backed by a single JSON file.
///
/// The file is reloaded on every operation, so external edits between gradz
/// invocations are picked up. Cards are returned in id order.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            return Ok(Collection::default());
        }
        let content = fs::read_to_string(&self.path).map_err(GradzError::Io)?;
        let collection: Collection =
            serde_json::from_str(&content).map_err(GradzError::Serialization)?;
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(GradzError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(collection).map_err(GradzError::Serialization)?;
        fs::write(&self.path, content).map_err(GradzError::Io)?;
        Ok(())
    }
}

impl CollectionStore for FileStore {
    fn find_cards(&self, query: &str) -> Result<Vec<CardId>> {
        let collection = self.load()?;
        let notes: HashMap<NoteId, &Note> = collection.notes.iter().map(|n| (n.id, n)).collect();
        let query = Query::parse(query);

        let mut ids: Vec<CardId> = collection
            .cards
            .iter()
            .filter(|c| query.matches(c, notes.get(&c.note_id).copied()))
            .map(|c| c.id)
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn get_card(&self, id: CardId) -> Result<Card> {
        let collection = self.load()?;
        collection
            .cards
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(GradzError::CardNotFound(id))
    }

    fn get_note(&self, id: NoteId) -> Result<Note> {
        let collection = self.load()?;
        collection
            .notes
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(GradzError::NoteNotFound(id))
    }

    fn update_note(&mut self, note: &Note) -> Result<()> {
        let mut collection = self.load()?;
        let slot = collection
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or(GradzError::NoteNotFound(note.id))?;

        *slot = note.clone();
        slot.updated_at = Utc::now();
        self.save(&collection)
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.load()?.notes)
    }

    fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(self.load()?.cards)
    }
}
