use crate::model::{CardId, NoteId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradzError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradzError>;
