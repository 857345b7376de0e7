//! Domain model for geotagged notes.
//!
//! # Responsibility
//! - Define the value types shared by tracker, proximity and storage code.
//! - Own creation-time invariants for notes (text bounds, derived tags).
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - Notes are immutable after creation; there is no edit path.

pub mod coordinate;
pub mod note;
