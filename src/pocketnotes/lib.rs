//! # PocketNotes Architecture
//!
//! PocketNotes is a **UI-agnostic note-taking library**. The bundled CLI is one client
//! of it; the same core could back a TUI, a web front end, or anything else that can
//! hold a [`session::Session`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selectors → note ids)                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drives the session the way a user would                  │
//! │  - Returns `CmdResult` values, never strings for a terminal │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (session.rs, editor.rs, filter.rs)              │
//! │  - Search query, active tags, the draft being edited        │
//! │  - Re-derives visible notes when the store notifies         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: owned collection, mutations, listeners        │
//! │  - NoteBackend trait: FileBackend (JSON), MemBackend        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types, never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; whoever embeds the library decides where they end up.
//!
//! ## Persistence
//!
//! The whole note collection is the unit of persistence: every mutation rewrites
//! the full ordered list. There is a single writer and the last write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`session`]: Search/tag state, edit mode and the derived note view
//! - [`editor`]: Draft state machine for creating and editing notes
//! - [`filter`]: Query and tag filtering, tag vocabulary
//! - [`store`]: Note store, persistence backends
//! - [`model`]: Core data types (`Note`, `NotePayload`)
//! - [`tags`]: Tag normalization
//! - [`index`]: Note selectors (`3`, `1f0c9a2e`, full UUIDs)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod tags;
