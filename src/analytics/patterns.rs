//! Day-of-week patterns and the year in review.

use crate::analytics::most_common_mood;
use crate::store::MoodEntry;
use chrono::{Datelike, Weekday};

/// Dominant mood and entry count for one weekday across all history.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayMood {
    pub weekday: Weekday,
    /// Highest-count emoji among entries on this weekday, `None` when the
    /// weekday has no entries.
    pub dominant: Option<String>,
    pub count: usize,
}

/// Computes the dominant emoji and entry count for each of the seven
/// weekdays, Monday first.
pub fn weekday_pattern(entries: &[MoodEntry]) -> Vec<WeekdayMood> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .map(|weekday| {
        let on_day: Vec<MoodEntry> = entries
            .iter()
            .filter(|e| e.date.weekday() == weekday)
            .cloned()
            .collect();
        WeekdayMood {
            weekday,
            dominant: most_common_mood(&on_day).map(str::to_string),
            count: on_day.len(),
        }
    })
    .collect()
}

/// Aggregate summary for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// Month number, 1-12.
    pub month: u32,
    pub count: usize,
    /// Highest-count emoji for the month, ties broken by first-encountered
    /// order; `None` when the month has no entries.
    pub dominant: Option<String>,
}

/// Aggregate summary for one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearReview {
    pub year: i32,
    /// One summary per month, January first.
    pub months: Vec<MonthSummary>,
    /// Total entries in the year.
    pub total_entries: usize,
    /// The single most frequent emoji across the whole year.
    pub top_emoji: Option<String>,
}

/// Partitions the year's entries by calendar month and summarizes each,
/// plus year-level totals.
pub fn year_in_review(entries: &[MoodEntry], year: i32) -> YearReview {
    let in_year: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.date.year() == year)
        .cloned()
        .collect();

    let months = (1..=12)
        .map(|month| {
            let in_month: Vec<MoodEntry> = in_year
                .iter()
                .filter(|e| e.date.month() == month)
                .cloned()
                .collect();
            MonthSummary {
                month,
                count: in_month.len(),
                dominant: most_common_mood(&in_month).map(str::to_string),
            }
        })
        .collect();

    YearReview {
        year,
        months,
        total_entries: in_year.len(),
        top_emoji: most_common_mood(&in_year).map(str::to_string),
    }
}
