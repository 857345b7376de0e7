use geomemo_core::service::trend::normalize_trending_limit;
use geomemo_core::{extract_tags, trending, trending_tags, Coordinate, Note, TrendingTag};

fn note(text: &str) -> Note {
    Note::new(text, Coordinate::new(51.505, -0.09), None, 1_700_000_000_000).unwrap()
}

#[test]
fn extract_tags_preserves_first_casing_and_collapses_duplicates() {
    assert_eq!(
        extract_tags("Nice #Sunset at the #beach! #beach"),
        vec!["#Sunset".to_string(), "#beach".to_string()]
    );
}

#[test]
fn extract_tags_dedupes_case_insensitively() {
    assert_eq!(extract_tags("#Rust and #rust and #RUST_2024"), vec!["#Rust", "#RUST_2024"]);
}

#[test]
fn extract_tags_on_empty_text_is_empty() {
    assert!(extract_tags("").is_empty());
    assert!(extract_tags("no tags here").is_empty());
}

#[test]
fn note_tags_are_derived_from_text() {
    let created = note("Lunch #Food with #friends #food");
    assert_eq!(created.tags, vec!["#Food", "#friends"]);
    assert!(created.has_tag("#FOOD"));
}

#[test]
fn trending_ranks_by_count_then_first_appearance() {
    let notes = vec![note("one #a"), note("two #a"), note("three #b")];
    assert_eq!(trending(&notes, None), vec!["#a", "#b"]);
}

#[test]
fn trending_breaks_ties_by_corpus_order() {
    let notes = vec![note("#late #early"), note("#early #late"), note("#solo")];
    assert_eq!(trending(&notes, None), vec!["#late", "#early", "#solo"]);
}

#[test]
fn trending_counts_a_tag_once_per_note_and_merges_case() {
    let notes = vec![
        note("#Beach day #BEACH"),
        note("#beach again"),
        note("#city #city2"),
        note("#city"),
        note("#city"),
    ];
    assert_eq!(
        trending_tags(&notes, None),
        vec![
            TrendingTag {
                label: "#city".to_string(),
                count: 3,
            },
            TrendingTag {
                label: "#Beach".to_string(),
                count: 2,
            },
            TrendingTag {
                label: "#city2".to_string(),
                count: 1,
            },
        ]
    );
}

#[test]
fn trending_truncates_to_limit() {
    let notes: Vec<Note> = (0..10).map(|idx| note(&format!("#tag{idx}"))).collect();
    assert_eq!(trending(&notes, None).len(), 6);
    assert_eq!(trending(&notes, Some(3)), vec!["#tag0", "#tag1", "#tag2"]);
}

#[test]
fn trending_limit_zero_uses_default() {
    assert_eq!(normalize_trending_limit(Some(0)), 6);
    assert_eq!(normalize_trending_limit(None), 6);
    assert_eq!(normalize_trending_limit(Some(12)), 12);
}

#[test]
fn trending_on_empty_corpus_is_empty() {
    assert!(trending(&[], None).is_empty());
}
