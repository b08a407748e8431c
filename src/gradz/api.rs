//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point for all gradz operations, regardless of the UI driving them.
//!
//! It dispatches to command functions, loads the thresholds for a run, and
//! returns structured `Result<CmdResult>` values. No business logic, no I/O
//! formatting, no presentation concerns.
//!
//! ## Generic Over CollectionStore
//!
//! `GradzApi<S: CollectionStore>` is generic over the storage backend:
//! - Production: `GradzApi<FileStore>`
//! - Testing: `GradzApi<InMemoryStore>`

use crate::commands;
use crate::commands::config::ConfigAction;
use crate::config::Thresholds;
use crate::error::Result;
use crate::store::CollectionStore;
use std::path::{Path, PathBuf};

/// The main API facade for gradz operations.
///
/// All UI clients should interact through this API. Thresholds are loaded once
/// per tagging invocation from the configured directory.
pub struct GradzApi<S: CollectionStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: CollectionStore> GradzApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Run the tag reconciler over the cards matched by `query`
    /// (every card when empty).
    pub fn assign_tags(&mut self, query: &str) -> Result<commands::CmdResult> {
        let cfg = Thresholds::load(&self.config_dir).unwrap_or_default();
        commands::tag::run(&mut self.store, query, &cfg)
    }

    /// Same as [`assign_tags`](Self::assign_tags) with explicit thresholds.
    pub fn assign_tags_with(
        &mut self,
        query: &str,
        cfg: &Thresholds,
    ) -> Result<commands::CmdResult> {
        commands::tag::run(&mut self.store, query, cfg)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
