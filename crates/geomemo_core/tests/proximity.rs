use geomemo_core::geo::EARTH_RADIUS_METERS;
use geomemo_core::{distance_meters, history, nearby, Coordinate, Note};

const NOW: i64 = 1_760_000_000_000;
const ORIGIN: Coordinate = Coordinate::new(51.505, -0.09);

fn north_of(origin: Coordinate, meters: f64) -> Coordinate {
    let delta_degrees = (meters / EARTH_RADIUS_METERS).to_degrees();
    Coordinate::new(origin.lat + delta_degrees, origin.lng)
}

fn note_at(text: &str, location: Coordinate, minutes_ago: i64) -> Note {
    Note::new(text, location, None, NOW - minutes_ago * 60_000).unwrap()
}

fn ring_corpus() -> Vec<Note> {
    [0.0, 5.0, 10.0, 11.0, 1000.0]
        .iter()
        .map(|&meters| note_at(&format!("at {meters} m"), north_of(ORIGIN, meters), 5))
        .collect()
}

#[test]
fn corpus_distances_are_exact() {
    let distances: Vec<u64> = ring_corpus()
        .iter()
        .map(|note| distance_meters(ORIGIN, note.location))
        .collect();
    assert_eq!(distances, vec![0, 5, 10, 11, 1000]);
}

#[test]
fn nearby_keeps_only_notes_within_radius_in_corpus_order() {
    let notes = ring_corpus();
    let views = nearby(Some(ORIGIN), &notes, Some(10.0), NOW);

    let texts: Vec<&str> = views.iter().map(|view| view.note.text.as_str()).collect();
    assert_eq!(texts, vec!["at 0 m", "at 5 m", "at 10 m"]);
    assert_eq!(views[1].distance_meters, Some(5));
    assert_eq!(views[1].distance_label.as_deref(), Some("5 m"));
    assert_eq!(views[1].relative_time, "5 min ago");
}

#[test]
fn nearby_does_not_reorder_by_distance() {
    let notes: Vec<Note> = [10.0, 0.0, 5.0]
        .iter()
        .map(|&meters| note_at(&format!("at {meters} m"), north_of(ORIGIN, meters), 1))
        .collect();
    let views = nearby(Some(ORIGIN), &notes, Some(10.0), NOW);

    let distances: Vec<Option<u64>> = views.iter().map(|view| view.distance_meters).collect();
    assert_eq!(distances, vec![Some(10), Some(0), Some(5)]);
}

#[test]
fn nearby_defaults_radius_to_ten_meters() {
    let notes = ring_corpus();
    for radius in [None, Some(0.0), Some(-1.0), Some(f64::NAN), Some(f64::INFINITY)] {
        assert_eq!(nearby(Some(ORIGIN), &notes, radius, NOW).len(), 3);
    }
}

#[test]
fn nearby_honours_wider_radius() {
    let notes = ring_corpus();
    let views = nearby(Some(ORIGIN), &notes, Some(1500.0), NOW);
    assert_eq!(views.len(), 5);
    assert_eq!(views[4].distance_label.as_deref(), Some("1.00 km"));
}

#[test]
fn nearby_without_reference_is_empty() {
    let notes = ring_corpus();
    assert!(nearby(None, &notes, Some(10.0), NOW).is_empty());
}

#[test]
fn history_includes_every_note_and_omits_distance_without_reference() {
    let notes = ring_corpus();
    let views = history(&notes, None, NOW);
    assert_eq!(views.len(), notes.len());
    assert!(views
        .iter()
        .all(|view| view.distance_meters.is_none() && view.distance_label.is_none()));
    assert!(views.iter().all(|view| view.relative_time == "5 min ago"));
}

#[test]
fn history_annotates_distance_with_reference() {
    let notes = ring_corpus();
    let views = history(&notes, Some(ORIGIN), NOW);
    let labels: Vec<Option<&str>> = views
        .iter()
        .map(|view| view.distance_label.as_deref())
        .collect();
    assert_eq!(
        labels,
        vec![
            Some("0 m"),
            Some("5 m"),
            Some("10 m"),
            Some("11 m"),
            Some("1.00 km")
        ]
    );
}

#[test]
fn views_do_not_mutate_the_corpus() {
    let notes = ring_corpus();
    let before = notes.clone();
    let _ = nearby(Some(ORIGIN), &notes, None, NOW);
    let _ = history(&notes, Some(ORIGIN), NOW);
    assert_eq!(notes, before);
}
