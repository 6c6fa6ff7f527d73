//! Tag frequency ranking.
//!
//! The tag index is derived entirely from the entry collection; mutation of
//! tags on an entry goes through the entry store, not through here.

use crate::constants::POPULAR_TAG_LIMIT;
use crate::store::MoodEntry;
use std::collections::HashMap;

/// Counts tag occurrences across all entries, sorted by descending count.
///
/// Equal counts keep the order in which the tags were first encountered
/// while scanning the entries (the sort is stable), though callers should
/// not rely on any particular ordering among ties.
pub fn tag_frequency(entries: &[MoodEntry]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for entry in entries {
        for tag in &entry.tags {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag.as_str());
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|tag| (tag.to_string(), counts[tag]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The top five tags by frequency.
pub fn popular_tags(entries: &[MoodEntry]) -> Vec<(String, usize)> {
    let mut ranked = tag_frequency(entries);
    ranked.truncate(POPULAR_TAG_LIMIT);
    ranked
}
