//! # Gradz Architecture
//!
//! Gradz is a **UI-agnostic tagging library**. The CLI binary is just one client:
//! everything from `api.rs` inward takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never touches stdout, stderr, or the process exit code.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Loads thresholds, returns structured Result types        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: tag reconciliation, listing, settings    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CollectionStore trait                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What gradz does
//!
//! Each flashcard carries review statistics: a lapse count, the current interval
//! in days, and a scaled ease factor. [`classify`] maps those numbers to one of
//! five difficulty labels (VeryHard / Hard / Medium / Easy / VeryEasy) against
//! the configurable [`config::Thresholds`]. The tag command then rewrites each
//! matched note's tag set so it carries exactly the computed label and nothing
//! else from the difficulty vocabulary, leaving unrelated tags alone.
//!
//! The card and note data lives in whatever backend implements
//! [`store::CollectionStore`]; gradz never owns a scheduler or a review UI.
//!
//! ## Testing Strategy
//!
//! The lion's share of tests lives next to the command and classifier logic as
//! `#[cfg(test)]` modules running against `InMemoryStore`. The `tests/`
//! directory exercises the compiled binary end to end against a temp
//! collection file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`classify`]: The difficulty decision table
//! - [`commands`]: Business logic for each command
//! - [`config`]: Threshold configuration and persistence
//! - [`error`]: Error types
//! - [`model`]: Core data types (`Card`, `Note`, `Difficulty`)
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use classify::classify;
