//! Persistence contract shared by all note backends.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a note backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Io(std::io::Error),
    Serde(serde_json::Error),
    DuplicateNote(NoteId),
    /// The connection was not migrated to the note schema.
    MissingTable(&'static str),
    /// A stored record violates note invariants.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "note file error: {err}"),
            Self::Serde(err) => write!(f, "note file is not valid JSON: {err}"),
            Self::DuplicateNote(id) => write!(f, "note already stored: {id}"),
            Self::MissingTable(table) => write!(f, "note store is missing table `{table}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::DuplicateNote(_) | Self::MissingTable(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Storage backend for the note corpus.
pub trait NoteRepository {
    /// Loads every stored note, newest first.
    fn load_all(&self) -> StorageResult<Vec<Note>>;
    /// Persists one new note.
    fn append(&mut self, note: &Note) -> StorageResult<()>;
}

/// Re-validates a loaded note and tags the error with its id.
pub(crate) fn check_loaded(note: &Note) -> StorageResult<()> {
    note.validate()
        .map_err(|err| StorageError::InvalidData(format!("note {}: {err}", note.id)))
}
