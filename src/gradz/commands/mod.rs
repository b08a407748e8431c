use crate::config::Thresholds;
use crate::model::{Difficulty, Note};

pub mod config;
pub mod list;
pub mod tag;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the note overview produced by the list command.
#[derive(Debug, Clone)]
pub struct NoteOverview {
    pub note: Note,
    pub difficulty: Option<Difficulty>,
    pub decks: Vec<String>,
    pub cards: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes whose tag set was rewritten this run
    pub processed: usize,
    pub affected_notes: Vec<Note>,
    pub listed: Vec<NoteOverview>,
    pub config: Option<Thresholds>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.processed = notes.len();
        self.affected_notes = notes;
        self
    }

    pub fn with_listed(mut self, listed: Vec<NoteOverview>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_config(mut self, config: Thresholds) -> Self {
        self.config = Some(config);
        self
    }
}
