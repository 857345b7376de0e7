//! Core location and proximity engine for GeoMemo.
//! This crate is the single source of truth for note and tracking invariants.

pub mod config;
pub mod db;
pub mod geo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod text;
pub mod tracker;

pub use config::{ConfigError, EngineConfig};
pub use geo::{distance_meters, format_coordinate, format_distance};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::coordinate::{Coordinate, CoordinateError};
pub use model::note::{Note, NoteId, NoteValidationError, MAX_NOTE_CHARS};
pub use repo::json_note_repo::JsonFileNoteRepository;
pub use repo::note_repo::{NoteRepository, StorageError, StorageResult};
pub use repo::sqlite_note_repo::SqliteNoteRepository;
pub use service::note_service::{NoteService, NoteServiceError};
pub use service::proximity::{history, nearby, NoteView};
pub use service::trend::{trending, trending_tags, TrendingTag};
pub use text::tags::extract_tags;
pub use text::time::{now_epoch_ms, relative_time};
pub use tracker::{
    ChannelObserver, FnObserver, LiveTracking, LocationTracker, PositionErrorKind,
    PositionSource, TrackerEvent, TrackerObserver, TrackerStatus, TrackingMode, WatchId,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
