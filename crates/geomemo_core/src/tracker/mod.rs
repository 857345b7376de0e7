//! Live/simulated position tracking.
//!
//! # Responsibility
//! - Own the single "active location" consumed by proximity views.
//! - Classify position-source failures without aborting the session.
//! - Notify registered observers on every applied state change.
//!
//! # Invariants
//! - `active = simulated` in simulated mode, else `live`.
//! - Operations invoked in the wrong mode are silent no-ops.
//! - Notifications are applied in arrival order; last applied wins.

pub mod location_tracker;
pub mod observer;
pub mod position;

pub use location_tracker::{LocationTracker, TrackerStatus, TrackingMode};
pub use observer::{ChannelObserver, FnObserver, TrackerEvent, TrackerObserver};
pub use position::{LiveTracking, PositionErrorKind, PositionSource, WatchId};
