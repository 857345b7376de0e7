//! Position-source contract and watch lifecycle.
//!
//! # Responsibility
//! - Classify platform geolocation failures.
//! - Keep at most one live watch open per source.
//!
//! # Invariants
//! - `ensure_started` and `stop` are idempotent.
//! - Start failures are reported to the tracker, never raised as panics.

use crate::tracker::location_tracker::LocationTracker;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Handle returned by [`PositionSource::watch`].
pub type WatchId = u64;

/// Classified position-source failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorKind {
    /// The user or platform refused location access.
    PermissionDenied,
    /// No fix could be produced (no hardware, no signal, unsupported).
    Unavailable,
    /// The source gave up waiting for a fix.
    Timeout,
}

impl PositionErrorKind {
    /// Maps W3C geolocation error codes; unknown codes are `Unavailable`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }

    /// Stable identifier for logs and translation keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::Unavailable => "unavailable",
            Self::Timeout => "timeout",
        }
    }
}

impl Display for PositionErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "location permission denied"),
            Self::Unavailable => write!(f, "location unavailable"),
            Self::Timeout => write!(f, "location request timed out"),
        }
    }
}

impl Error for PositionErrorKind {}

/// External provider of live position fixes.
///
/// Fixes and failures are delivered out of band by the host, which forwards
/// them to [`LocationTracker::report_live_position`] and
/// [`LocationTracker::report_position_error`].
pub trait PositionSource {
    /// Begins delivering fixes and returns a handle for [`clear_watch`].
    ///
    /// [`clear_watch`]: PositionSource::clear_watch
    fn watch(&mut self) -> Result<WatchId, PositionErrorKind>;
    /// Stops the watch identified by `id`.
    fn clear_watch(&mut self, id: WatchId);
}

/// Owns the single live watch on a position source.
pub struct LiveTracking<S: PositionSource> {
    source: S,
    watch_id: Option<WatchId>,
}

impl<S: PositionSource> LiveTracking<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            watch_id: None,
        }
    }

    /// Starts watching unless a watch is already open.
    ///
    /// Returns `true` when a watch is active afterwards. A failed start is
    /// forwarded to `tracker` as a classified error.
    pub fn ensure_started(&mut self, tracker: &mut LocationTracker) -> bool {
        if self.watch_id.is_some() {
            return true;
        }

        match self.source.watch() {
            Ok(id) => {
                info!("event=geo_watch module=tracker status=started watch_id={id}");
                self.watch_id = Some(id);
                true
            }
            Err(kind) => {
                warn!(
                    "event=geo_watch module=tracker status=error error_code={}",
                    kind.as_str()
                );
                tracker.report_position_error(kind);
                false
            }
        }
    }

    /// Clears the open watch, if any.
    pub fn stop(&mut self) {
        if let Some(id) = self.watch_id.take() {
            self.source.clear_watch(id);
            info!("event=geo_watch module=tracker status=stopped watch_id={id}");
        }
    }

    pub fn is_active(&self) -> bool {
        self.watch_id.is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
