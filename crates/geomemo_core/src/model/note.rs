//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical geotagged note record.
//! - Derive tags from text at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `text` is non-empty after trimming and at most [`MAX_NOTE_CHARS`] chars.
//! - `tags` always equals `extract_tags(text)`; it is never edited on its own.

use crate::model::coordinate::{Coordinate, CoordinateError};
use crate::text::tags::extract_tags;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Hard upper bound on note length, counted in Unicode scalar values.
pub const MAX_NOTE_CHARS: usize = 1000;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Validation failures for note construction and load paths.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteValidationError {
    NilId,
    EmptyText,
    TextTooLong { chars: usize, max: usize },
    InvalidLocation(CoordinateError),
    /// Stored tags differ from the ones derived from the text.
    TagsMismatch,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id must not be nil"),
            Self::EmptyText => write!(f, "note text must not be empty"),
            Self::TextTooLong { chars, max } => {
                write!(f, "note text has {chars} chars; limit is {max}")
            }
            Self::InvalidLocation(err) => write!(f, "invalid note location: {err}"),
            Self::TagsMismatch => write!(f, "note tags do not match note text"),
        }
    }
}

impl Error for NoteValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoordinateError> for NoteValidationError {
    fn from(value: CoordinateError) -> Self {
        Self::InvalidLocation(value)
    }
}

/// A short text note pinned to the place it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Absent for anonymous notes.
    pub author_id: Option<String>,
    pub location: Coordinate,
    /// Display-form hashtags in first-occurrence order.
    pub tags: Vec<String>,
}

impl Note {
    /// Creates a note with a generated id and derived tags.
    pub fn new(
        text: impl Into<String>,
        location: Coordinate,
        author_id: Option<String>,
        created_at: i64,
    ) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4(), text, location, author_id, created_at)
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: NoteId,
        text: impl Into<String>,
        location: Coordinate,
        author_id: Option<String>,
        created_at: i64,
    ) -> Result<Self, NoteValidationError> {
        let text = text.into();
        let tags = extract_tags(&text);
        let note = Self {
            id,
            text,
            created_at,
            author_id,
            location,
            tags,
        };
        note.validate()?;
        Ok(note)
    }

    /// Re-checks every construction invariant.
    ///
    /// Load paths call this so corrupt persisted records surface as errors
    /// instead of leaking into proximity views.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(NoteValidationError::EmptyText);
        }
        let chars = self.text.chars().count();
        if chars > MAX_NOTE_CHARS {
            return Err(NoteValidationError::TextTooLong {
                chars,
                max: MAX_NOTE_CHARS,
            });
        }
        self.location.validate()?;
        if self.tags != extract_tags(&self.text) {
            return Err(NoteValidationError::TagsMismatch);
        }
        Ok(())
    }

    /// Returns whether the note carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value.eq_ignore_ascii_case(tag))
    }
}
