//! # CLI Layer
//!
//! One client of the library among possible others. It parses arguments
//! ([`setup`]), opens the collection in the data directory and dispatches to
//! [`NotesApi`](pocketnotes::api::NotesApi) ([`commands`]), and turns each
//! `CmdResult` into terminal output ([`render`]).
//!
//! Business rules stay in the library; nothing here decides what a valid note is.

mod commands;
mod render;
mod setup;

pub use commands::run;
