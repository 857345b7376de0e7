//! Two-mode location state machine.
//!
//! # Invariants
//! - Starts in [`TrackingMode::Live`] with no locations.
//! - `simulated_location` is `None` whenever the mode is `Live`.
//! - `has_manual_selection` is only ever `true` while simulating.
//! - Coordinates are never logged; only modes and outcomes are.

use crate::config::EngineConfig;
use crate::model::coordinate::Coordinate;
use crate::tracker::observer::{TrackerEvent, TrackerObserver};
use crate::tracker::position::PositionErrorKind;
use log::{debug, info, warn};
use std::fmt::{Debug, Formatter};

/// Which source feeds the active location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackingMode {
    #[default]
    Live,
    Simulated,
}

impl TrackingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Simulated => "simulated",
        }
    }
}

/// Display-oriented summary of the tracker, mapped to status lines by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerStatus {
    /// Waiting for a first fix.
    Locating,
    /// Live fix available.
    Located(Coordinate),
    /// Simulated position in effect.
    Simulated(Coordinate),
    /// The live source failed and no newer fix has arrived.
    Failed(PositionErrorKind),
}

/// Owner of live/simulated position state for one session.
pub struct LocationTracker {
    mode: TrackingMode,
    live_location: Option<Coordinate>,
    simulated_location: Option<Coordinate>,
    has_manual_selection: bool,
    last_error: Option<PositionErrorKind>,
    default_location: Coordinate,
    follow_live_while_simulating: bool,
    observers: Vec<Box<dyn TrackerObserver>>,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl Debug for LocationTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationTracker")
            .field("mode", &self.mode)
            .field("live_location", &self.live_location)
            .field("simulated_location", &self.simulated_location)
            .field("has_manual_selection", &self.has_manual_selection)
            .field("last_error", &self.last_error)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl LocationTracker {
    /// Creates a tracker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker seeded from engine settings.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            mode: TrackingMode::Live,
            live_location: None,
            simulated_location: None,
            has_manual_selection: false,
            last_error: None,
            default_location: config.default_location,
            follow_live_while_simulating: config.follow_live_while_simulating,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for subsequent state changes.
    pub fn subscribe(&mut self, observer: impl TrackerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies a fix from the live position source.
    ///
    /// In simulated mode the fix is recorded as the latest live location and,
    /// until the user places the simulated marker manually, also moves the
    /// simulated location. With live-following disabled it is dropped.
    pub fn report_live_position(&mut self, coordinate: Coordinate) {
        match self.mode {
            TrackingMode::Live => {
                self.live_location = Some(coordinate);
                self.last_error = None;
                self.notify_location();
            }
            TrackingMode::Simulated if !self.follow_live_while_simulating => {
                debug!("event=live_position module=tracker status=ignored mode=simulated");
            }
            TrackingMode::Simulated => {
                self.live_location = Some(coordinate);
                self.last_error = None;
                if self.has_manual_selection {
                    debug!(
                        "event=live_position module=tracker status=recorded mode=simulated reason=manual_selection"
                    );
                    return;
                }
                self.simulated_location = Some(coordinate);
                self.notify_location();
            }
        }
    }

    /// Records a classified failure from the live position source.
    pub fn report_position_error(&mut self, kind: PositionErrorKind) {
        warn!(
            "event=live_position module=tracker status=error mode={} error_code={}",
            self.mode.as_str(),
            kind.as_str()
        );
        self.last_error = Some(kind);
        self.emit(TrackerEvent::PositionFailed(kind));
    }

    /// Switches to simulated mode.
    ///
    /// The simulated location is seeded from `initial`, else the last live
    /// fix, else the configured default. An explicit `initial` counts as a
    /// manual selection. No-op when already simulating.
    pub fn enter_simulation(&mut self, initial: Option<Coordinate>) {
        if self.mode == TrackingMode::Simulated {
            debug!("event=enter_simulation module=tracker status=noop reason=already_simulating");
            return;
        }

        self.mode = TrackingMode::Simulated;
        let (seed, source) = match (initial, self.live_location) {
            (Some(coordinate), _) => {
                self.has_manual_selection = true;
                (coordinate, "explicit")
            }
            (None, Some(live)) => (live, "live"),
            (None, None) => (self.default_location, "default"),
        };
        self.simulated_location = Some(seed);
        info!("event=enter_simulation module=tracker status=ok seed={source}");
        self.notify_location();
    }

    /// Moves the simulated position; only honoured while simulating.
    pub fn set_simulated_position(&mut self, coordinate: Coordinate) {
        if self.mode != TrackingMode::Simulated {
            debug!("event=set_simulated_position module=tracker status=noop mode=live");
            return;
        }

        self.simulated_location = Some(coordinate);
        self.has_manual_selection = true;
        self.notify_location();
    }

    /// Returns to live mode and discards the simulated position.
    pub fn exit_simulation(&mut self) {
        if self.mode == TrackingMode::Live {
            debug!("event=exit_simulation module=tracker status=noop reason=already_live");
            return;
        }

        self.mode = TrackingMode::Live;
        self.simulated_location = None;
        self.has_manual_selection = false;
        info!(
            "event=exit_simulation module=tracker status=ok has_live={}",
            self.live_location.is_some()
        );
        self.notify_location();
    }

    /// Returns the coordinate currently in effect.
    pub fn active_location(&self) -> Option<Coordinate> {
        match self.mode {
            TrackingMode::Live => self.live_location,
            TrackingMode::Simulated => self.simulated_location,
        }
    }

    pub fn has_location(&self) -> bool {
        self.active_location().is_some()
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn live_location(&self) -> Option<Coordinate> {
        self.live_location
    }

    pub fn simulated_location(&self) -> Option<Coordinate> {
        self.simulated_location
    }

    pub fn has_manual_selection(&self) -> bool {
        self.has_manual_selection
    }

    /// Summarizes the tracker for status display.
    pub fn status(&self) -> TrackerStatus {
        match self.mode {
            TrackingMode::Simulated => self
                .simulated_location
                .map_or(TrackerStatus::Locating, TrackerStatus::Simulated),
            TrackingMode::Live => match (self.last_error, self.live_location) {
                (Some(kind), _) => TrackerStatus::Failed(kind),
                (None, Some(live)) => TrackerStatus::Located(live),
                (None, None) => TrackerStatus::Locating,
            },
        }
    }

    fn notify_location(&self) {
        self.emit(TrackerEvent::LocationChanged {
            mode: self.mode,
            active: self.active_location(),
        });
    }

    fn emit(&self, event: TrackerEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}
