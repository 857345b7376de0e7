//! Note persistence contracts and backends.
//!
//! # Responsibility
//! - Define the load/append contract used by the note corpus owner.
//! - Keep SQL and file-format details out of the service layer.
//!
//! # Invariants
//! - `load_all` returns notes newest-first.
//! - Every loaded note passes `Note::validate()`.
//! - `append` rejects a note id that is already stored.

pub mod json_note_repo;
pub mod note_repo;
pub mod sqlite_note_repo;
