//! Trending hashtag aggregation.
//!
//! # Invariants
//! - A note contributes at most one count per normalized tag.
//! - Ties keep first-seen corpus order.
//! - Labels use the casing of the first occurrence in the corpus.

use crate::config::DEFAULT_TRENDING_LIMIT;
use crate::model::note::Note;
use crate::text::tags::normalize_tag;
use std::collections::{HashMap, HashSet};

/// One ranked tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingTag {
    pub label: String,
    pub count: usize,
}

/// Returns the display labels of the most frequent tags.
pub fn trending(notes: &[Note], limit: Option<usize>) -> Vec<String> {
    trending_tags(notes, limit)
        .into_iter()
        .map(|tag| tag.label)
        .collect()
}

/// Returns ranked tags with their note counts.
pub fn trending_tags(notes: &[Note], limit: Option<usize>) -> Vec<TrendingTag> {
    let limit = normalize_trending_limit(limit);
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<TrendingTag> = Vec::new();

    for note in notes {
        let mut counted = HashSet::new();
        for tag in &note.tags {
            let key = normalize_tag(tag);
            if !counted.insert(key.clone()) {
                continue;
            }
            match slots.get(&key) {
                Some(&slot) => ranked[slot].count += 1,
                None => {
                    slots.insert(key, ranked.len());
                    ranked.push(TrendingTag {
                        label: tag.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // `sort_by` is stable, so equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Normalizes the trending limit; `None` and `0` mean the default of 6.
pub fn normalize_trending_limit(limit: Option<usize>) -> usize {
    match limit {
        Some(0) | None => DEFAULT_TRENDING_LIMIT,
        Some(value) => value,
    }
}
