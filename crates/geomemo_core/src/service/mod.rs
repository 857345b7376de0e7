//! Use-case services and derived views.
//!
//! # Responsibility
//! - Own the in-memory note corpus and its write path.
//! - Derive nearby/history/trending views on demand (pull model).
//!
//! # Invariants
//! - View functions are pure over their inputs.
//! - The corpus only grows through a successful repository append.

pub mod note_service;
pub mod proximity;
pub mod trend;
