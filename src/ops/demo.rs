//! Generated demo data.
//!
//! The generator is deterministic relative to the reference date: a fixed
//! mood cycle with periodic gaps, occasional notes, and a small tag
//! rotation. That keeps demo output reproducible without a random-number
//! dependency.

use crate::constants::DEMO_DAYS;
use crate::errors::AppResult;
use crate::store::{EntryStore, Settings};
use chrono::{Duration, NaiveDate};
use tracing::info;

const DEMO_MOOD_CYCLE: &[&str] = &[
    "😊", "😄", "😐", "😊", "😢", "😄", "😴", "😊", "😰", "😄", "😐", "😠",
];

const DEMO_NOTES: &[&str] = &[
    "Long walk after lunch",
    "Slow day, early night",
    "Finished a good book",
    "Dinner with friends",
];

const DEMO_TAGS: &[&str] = &["work", "gym", "family", "reading"];

/// Clears the journal and fills it with generated history covering the
/// trailing [`DEMO_DAYS`] days, then sets the demo-mode flag.
pub fn load_demo_data(
    store: &EntryStore<'_>,
    settings: &Settings<'_>,
    today: NaiveDate,
) -> AppResult<String> {
    store.clear_all()?;

    let mut count = 0;
    for offset in 0..DEMO_DAYS {
        // Skip some days so streak and gap handling have something to show.
        if offset % 9 == 4 || offset % 13 == 7 {
            continue;
        }
        let date = today - Duration::days(offset);
        let idx = offset as usize;

        let emoji = DEMO_MOOD_CYCLE[idx % DEMO_MOOD_CYCLE.len()];
        let note = if idx % 5 == 0 {
            DEMO_NOTES[(idx / 5) % DEMO_NOTES.len()]
        } else {
            ""
        };
        let tags = if idx % 4 == 0 {
            Some(vec![DEMO_TAGS[(idx / 4) % DEMO_TAGS.len()].to_string()])
        } else {
            None
        };

        store.save(date, emoji, note, tags)?;
        count += 1;
    }

    settings.set_demo_mode(true);
    info!("Loaded {} demo entries", count);
    Ok(format!(
        "Loaded {} demo entries covering the last {} days.",
        count, DEMO_DAYS
    ))
}
