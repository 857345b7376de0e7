//! Note corpus owner.
//!
//! # Responsibility
//! - Restore the corpus from a repository and keep it newest-first.
//! - Validate and create notes at the active location.
//! - Expose nearby/history/trending views with configured defaults.
//!
//! # Invariants
//! - A note enters the in-memory corpus only after `append` succeeded.
//! - A failed restore leaves an empty corpus rather than a partial one.

use crate::config::EngineConfig;
use crate::model::coordinate::Coordinate;
use crate::model::note::{Note, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, StorageError};
use crate::service::proximity::{history, nearby, NoteView};
use crate::service::trend::{trending, trending_tags, TrendingTag};
use crate::text::time::now_epoch_ms;
use crate::tracker::LocationTracker;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Text or location failed note validation.
    InvalidNote(NoteValidationError),
    /// No active location is known yet.
    MissingLocation,
    /// Persistence-layer failure.
    Storage(StorageError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNote(err) => write!(f, "{err}"),
            Self::MissingLocation => write!(f, "no location available for the note"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNote(err) => Some(err),
            Self::MissingLocation => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::InvalidNote(value)
    }
}

impl From<StorageError> for NoteServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Note service facade over a repository implementation.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    config: EngineConfig,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service with default settings and an empty corpus.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, EngineConfig::default())
    }

    /// Creates a service with explicit settings and an empty corpus.
    pub fn with_config(repo: R, config: EngineConfig) -> Self {
        Self {
            repo,
            config,
            notes: Vec::new(),
        }
    }

    /// Replaces the in-memory corpus with the repository contents.
    ///
    /// On failure the corpus is left empty and the error is returned so the
    /// caller can surface it.
    pub fn restore(&mut self) -> Result<usize, NoteServiceError> {
        match self.repo.load_all() {
            Ok(notes) => {
                self.notes = notes;
                info!(
                    "event=notes_restore module=service status=ok count={}",
                    self.notes.len()
                );
                Ok(self.notes.len())
            }
            Err(err) => {
                self.notes.clear();
                error!("event=notes_restore module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Creates a note stamped with the current time.
    pub fn add_note(
        &mut self,
        text: &str,
        author_id: Option<String>,
        location: Option<Coordinate>,
    ) -> Result<Note, NoteServiceError> {
        self.add_note_at(text, author_id, location, now_epoch_ms())
    }

    /// Creates a note with an explicit creation timestamp.
    ///
    /// Rejections, in order: blank text, text over the configured limit,
    /// missing location.
    pub fn add_note_at(
        &mut self,
        text: &str,
        author_id: Option<String>,
        location: Option<Coordinate>,
        created_at: i64,
    ) -> Result<Note, NoteServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.rejected(NoteValidationError::EmptyText.into()));
        }
        let chars = text.chars().count();
        if chars > self.config.max_note_chars {
            return Err(self.rejected(
                NoteValidationError::TextTooLong {
                    chars,
                    max: self.config.max_note_chars,
                }
                .into(),
            ));
        }
        let Some(location) = location else {
            return Err(self.rejected(NoteServiceError::MissingLocation));
        };

        let note = Note::new(text, location, author_id, created_at)
            .map_err(|err| self.rejected(err.into()))?;
        self.repo.append(&note)?;
        self.notes.insert(0, note.clone());

        info!(
            "event=note_create module=service status=ok note_id={} tags={} corpus_size={}",
            note.id,
            note.tags.len(),
            self.notes.len()
        );
        Ok(note)
    }

    /// Creates a note at the tracker's active location.
    pub fn add_note_here(
        &mut self,
        text: &str,
        author_id: Option<String>,
        tracker: &LocationTracker,
    ) -> Result<Note, NoteServiceError> {
        self.add_note(text, author_id, tracker.active_location())
    }

    /// Current corpus, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes within the configured radius of the tracker's active location.
    pub fn nearby(&self, tracker: &LocationTracker, now_ms: i64) -> Vec<NoteView<'_>> {
        nearby(
            tracker.active_location(),
            &self.notes,
            Some(self.config.nearby_radius_meters),
            now_ms,
        )
    }

    /// Every note, with distances when the tracker has a location.
    pub fn history(&self, tracker: &LocationTracker, now_ms: i64) -> Vec<NoteView<'_>> {
        history(&self.notes, tracker.active_location(), now_ms)
    }

    /// Top tags using the configured limit.
    pub fn trending(&self) -> Vec<String> {
        trending(&self.notes, Some(self.config.trending_limit))
    }

    /// Top tags with counts using the configured limit.
    pub fn trending_tags(&self) -> Vec<TrendingTag> {
        trending_tags(&self.notes, Some(self.config.trending_limit))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn rejected(&self, err: NoteServiceError) -> NoteServiceError {
        warn!("event=note_create module=service status=rejected reason={err}");
        err
    }
}
