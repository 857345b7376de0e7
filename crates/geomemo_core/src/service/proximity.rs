//! Nearby/history projections over the note corpus.
//!
//! # Invariants
//! - Output preserves corpus order.
//! - Inputs are never mutated; views borrow the notes they annotate.
//! - A missing reference location yields no nearby notes, never an error.

use crate::config::DEFAULT_NEARBY_RADIUS_METERS;
use crate::geo::{distance_meters, format_distance};
use crate::model::coordinate::Coordinate;
use crate::model::note::Note;
use crate::text::time::relative_time;

/// A note annotated for list display.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteView<'a> {
    pub note: &'a Note,
    /// Present only when a reference location was supplied.
    pub distance_meters: Option<u64>,
    pub distance_label: Option<String>,
    pub relative_time: String,
}

/// Returns notes within `radius_meters` of `reference`, in corpus order.
///
/// `None`, non-positive or non-finite radii fall back to 10 m.
pub fn nearby<'a>(
    reference: Option<Coordinate>,
    notes: &'a [Note],
    radius_meters: Option<f64>,
    now_ms: i64,
) -> Vec<NoteView<'a>> {
    let Some(reference) = reference else {
        return Vec::new();
    };
    let radius = normalize_radius(radius_meters);

    notes
        .iter()
        .filter_map(|note| {
            let distance = distance_meters(reference, note.location);
            if distance as f64 > radius {
                return None;
            }
            Some(NoteView {
                note,
                distance_meters: Some(distance),
                distance_label: Some(format_distance(distance)),
                relative_time: relative_time(note.created_at, now_ms),
            })
        })
        .collect()
}

/// Returns every note annotated with its age, plus distance when
/// `reference` is known.
pub fn history<'a>(
    notes: &'a [Note],
    reference: Option<Coordinate>,
    now_ms: i64,
) -> Vec<NoteView<'a>> {
    notes
        .iter()
        .map(|note| {
            let distance = reference.map(|origin| distance_meters(origin, note.location));
            NoteView {
                note,
                distance_meters: distance,
                distance_label: distance.map(format_distance),
                relative_time: relative_time(note.created_at, now_ms),
            }
        })
        .collect()
}

/// Normalizes a caller-supplied radius.
pub fn normalize_radius(radius_meters: Option<f64>) -> f64 {
    match radius_meters {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => DEFAULT_NEARBY_RADIUS_METERS,
    }
}
