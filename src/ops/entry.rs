//! Entry logging and viewing operations.

use crate::analytics::most_common_mood;
use crate::errors::AppResult;
use crate::store::{EntryStore, MoodEntry};
use chrono::NaiveDate;
use tracing::info;

/// Formats one entry as a single display line.
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut line = format!("{}  {}", entry.date, entry.emoji);
    if !entry.note.is_empty() {
        line.push_str("  ");
        line.push_str(&entry.note);
    }
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
        line.push_str(&format!("  [{}]", tags.join(" ")));
    }
    line
}

/// Saves an entry and reports what was stored.
pub fn log_entry(
    store: &EntryStore<'_>,
    date: NaiveDate,
    emoji: &str,
    note: &str,
    tags: Option<Vec<String>>,
) -> AppResult<String> {
    let entry = store.save(date, emoji, note, tags)?;
    info!("Logged mood for {}", date);
    Ok(format!("Logged: {}", format_entry(&entry)))
}

/// Shows the entry for one day.
pub fn show_day(store: &EntryStore<'_>, date: NaiveDate) -> AppResult<String> {
    Ok(match store.get(date)? {
        Some(entry) => format_entry(&entry),
        None => format!("No entry for {}.", date),
    })
}

/// Shows every entry in a month, oldest first, with the month's most
/// common mood.
pub fn show_month(store: &EntryStore<'_>, year: i32, month: u32) -> AppResult<String> {
    let entries = store.get_for_month(year, month)?;
    if entries.is_empty() {
        return Ok(format!("No entries for {}-{:02}.", year, month));
    }

    let mut lines: Vec<String> = entries.iter().rev().map(format_entry).collect();
    lines.push(String::new());
    lines.push(format!(
        "{} entries; most common mood: {}",
        entries.len(),
        most_common_mood(&entries).unwrap_or("-")
    ));
    Ok(lines.join("\n"))
}

/// Deletes the entry for a date.
pub fn delete_entry(store: &EntryStore<'_>, date: NaiveDate) -> AppResult<String> {
    let existed = store.get(date)?.is_some();
    store.delete(date)?;
    Ok(if existed {
        format!("Deleted entry for {}.", date)
    } else {
        format!("No entry for {}; nothing to delete.", date)
    })
}

/// Wipes the whole journal.
pub fn clear_entries(store: &EntryStore<'_>) -> AppResult<String> {
    let count = store.get_all()?.len();
    store.clear_all()?;
    info!("Cleared {} entries", count);
    Ok(format!("Deleted {} entries.", count))
}
