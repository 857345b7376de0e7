//! Tracker change notifications.
//!
//! Observers are invoked synchronously from the mutating tracker call, in
//! registration order.

use crate::model::coordinate::Coordinate;
use crate::tracker::location_tracker::TrackingMode;
use crate::tracker::position::PositionErrorKind;
use std::sync::mpsc::Sender;

/// Event emitted by [`LocationTracker`](crate::tracker::LocationTracker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    /// The active location or the mode changed.
    LocationChanged {
        mode: TrackingMode,
        active: Option<Coordinate>,
    },
    /// The position source reported a classified failure.
    PositionFailed(PositionErrorKind),
}

/// Receives tracker events.
pub trait TrackerObserver {
    fn on_event(&self, event: &TrackerEvent);
}

/// Closure-backed observer.
pub struct FnObserver<F: Fn(&TrackerEvent)>(pub F);

impl<F: Fn(&TrackerEvent)> TrackerObserver for FnObserver<F> {
    fn on_event(&self, event: &TrackerEvent) {
        (self.0)(event);
    }
}

/// Forwards events into an mpsc channel.
///
/// A disconnected receiver is ignored; the tracker keeps running.
pub struct ChannelObserver {
    sender: Sender<TrackerEvent>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<TrackerEvent>) -> Self {
        Self { sender }
    }
}

impl TrackerObserver for ChannelObserver {
    fn on_event(&self, event: &TrackerEvent) {
        let _ = self.sender.send(*event);
    }
}
