//! CSV exchange codec for mood entries.
//!
//! The exchange format carries `(date, emoji, note)` triples only; tags are
//! not part of the format and are lost on a serialize/parse round-trip.
//! That is a documented limitation, not a bug: import merges into the
//! store with tags omitted, so existing tags on overwritten dates survive.
//!
//! ```text
//! Date,Emoji,Note
//! 2024-12-08,😊,"Had a great day!"
//! ```

use crate::constants::{CSV_HEADER, DATE_FORMAT_ISO};
use crate::errors::{AppResult, CsvError};
use crate::store::EntryStore;
use crate::store::MoodEntry;
use chrono::NaiveDate;
use tracing::{debug, info};

/// One valid data row from a parsed CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRecord {
    pub date: NaiveDate,
    pub emoji: String,
    pub note: String,
}

/// Result of parsing a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvImport {
    /// The rows that passed validation, in file order.
    pub records: Vec<CsvRecord>,
    /// Rows dropped for a missing date/emoji or an invalid calendar date.
    pub skipped: usize,
}

/// Serializes entries to CSV text.
///
/// Writes the fixed header `Date,Emoji,Note` followed by one row per entry
/// in the order given. The note column is always double-quoted with
/// internal quotes doubled; date and emoji are never quoted.
///
/// Returns an empty string for an empty slice. Callers must treat that as
/// "nothing to export", not as a valid header-only CSV.
pub fn serialize(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::from(CSV_HEADER);
    for entry in entries {
        out.push('\n');
        out.push_str(&format!(
            "{},{},\"{}\"",
            entry.date,
            entry.emoji,
            entry.note.replace('"', "\"\"")
        ));
    }
    out
}

/// Parses CSV text into importable records.
///
/// The header line is matched case-insensitively and column order is
/// irrelevant: `date`, `emoji`, and the optional `note` column are located
/// by name. Data lines are split with quote-aware comma handling (a `"`
/// toggles an in-quotes state, so commas inside quotes do not split); one
/// leading and one trailing quote are trimmed from the finished note.
///
/// A row is kept only if both date and emoji are non-empty and the date is
/// a valid calendar date; anything else is silently skipped and counted in
/// [`CsvImport::skipped`].
///
/// # Errors
///
/// Returns [`CsvError::NoData`] when the text has fewer than two lines,
/// and [`CsvError::MissingColumns`] when the header lacks a date or emoji
/// column.
pub fn parse(text: &str) -> Result<CsvImport, CsvError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return Err(CsvError::NoData);
    }

    let header: Vec<String> = lines[0]
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .collect();
    let column = |name: &str| header.iter().position(|c| c == name);
    let (Some(date_idx), Some(emoji_idx)) = (column("date"), column("emoji")) else {
        return Err(CsvError::MissingColumns);
    };
    let note_idx = column("note");

    let mut records = Vec::new();
    let mut skipped = 0;
    for line in &lines[1..] {
        let fields = split_quoted(line);
        let date_field = fields.get(date_idx).map(|f| f.trim()).unwrap_or("");
        let emoji_field = fields.get(emoji_idx).map(|f| f.trim()).unwrap_or("");

        let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT_ISO);
        let Ok(date) = date else {
            debug!("Skipping CSV row with invalid date: {:?}", line);
            skipped += 1;
            continue;
        };
        if emoji_field.is_empty() {
            debug!("Skipping CSV row with missing emoji: {:?}", line);
            skipped += 1;
            continue;
        }

        let note = note_idx
            .and_then(|idx| fields.get(idx))
            .map(|f| strip_outer_quotes(f.trim()))
            .unwrap_or_default();

        records.push(CsvRecord {
            date,
            emoji: emoji_field.to_string(),
            note,
        });
    }

    Ok(CsvImport { records, skipped })
}

/// Parses CSV text and merges every valid row into the store.
///
/// Entries for dates present in the import are overwritten (with their
/// existing tags preserved, since the CSV carries none); dates absent from
/// the import are left untouched. Returns the number of imported rows.
///
/// # Errors
///
/// Returns a CSV format error for structural problems in the input; store
/// failures follow the entry store's degradation policy.
pub fn import(store: &EntryStore<'_>, text: &str) -> AppResult<usize> {
    let parsed = parse(text)?;
    for record in &parsed.records {
        store.save(record.date, &record.emoji, &record.note, None)?;
    }
    info!(
        "Imported {} entries ({} rows skipped)",
        parsed.records.len(),
        parsed.skipped
    );
    Ok(parsed.records.len())
}

/// Splits a line on commas, ignoring commas inside double quotes.
///
/// Quote characters toggle the in-quotes state and are retained in the
/// field; there is no doubled-quote escape handling here.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Removes at most one leading and one trailing quote character.
fn strip_outer_quotes(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.to_string()
}
