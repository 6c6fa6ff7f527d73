//! Derived analytics over the mood entry history.
//!
//! Every function here is a pure read: it takes a slice of entries (as
//! handed out by the entry store) plus, where "today" matters, an explicit
//! reference date supplied by the caller's clock. Nothing in this module
//! mutates state, which keeps all of it deterministic under test.
//!
//! # Module Structure
//!
//! - `tags`: tag frequency ranking
//! - `insights`: weekly natural-language insights
//! - `patterns`: day-of-week patterns and the year in review

pub mod insights;
pub mod patterns;
pub mod tags;

use crate::constants::{DEFAULT_MOODS, NEUTRAL_MOOD_VALUE};
use crate::store::MoodEntry;
use chrono::{Duration, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashMap};

/// Full English name for a weekday, for user-facing output.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Maps an emoji to its 1-5 mood value.
///
/// Emoji outside the default set (custom moods) map to the neutral value 3.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::mood_value;
///
/// assert_eq!(mood_value("😄"), 5);
/// assert_eq!(mood_value("😠"), 1);
/// assert_eq!(mood_value("🤠"), 3); // custom emoji default to neutral
/// ```
pub fn mood_value(emoji: &str) -> u8 {
    DEFAULT_MOODS
        .iter()
        .find(|(e, _)| *e == emoji)
        .map(|(_, v)| *v)
        .unwrap_or(NEUTRAL_MOOD_VALUE)
}

/// Returns the most common emoji in the given entry sequence.
///
/// Ties are broken by first-encountered order in the sequence. The count
/// tally itself lives in a hash map whose iteration order carries no
/// meaning, so the winner is chosen by re-walking the entries in order and
/// requiring a strictly higher count to displace an earlier emoji.
pub fn most_common_mood(entries: &[MoodEntry]) -> Option<&str> {
    if entries.is_empty() {
        return None;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.emoji.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for entry in entries {
        let emoji = entry.emoji.as_str();
        let count = counts[emoji];
        match best {
            Some((winner, best_count)) if winner == emoji || count <= best_count => {}
            _ => best = Some((emoji, count)),
        }
    }
    best.map(|(emoji, _)| emoji)
}

/// Number of consecutive calendar days with an entry, counted backward from
/// the most recent entry date.
///
/// The streak is only "active" when the most recent entry is dated `today`
/// or yesterday; an older last entry yields 0 even if a long consecutive
/// run exists further in the past. Walking backward, a gap of any size
/// terminates the count.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let Some(&latest) = dates.iter().next_back() else {
        return 0;
    };
    if latest < today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = latest;
    while dates.contains(&(cursor - Duration::days(1))) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// The longest run of consecutive calendar days anywhere in the history.
///
/// Scans the entries sorted ascending by date: a difference of exactly one
/// day extends the running streak, a larger gap resets it to 1, and a
/// zero-day difference is ignored entirely. Duplicate dates should not
/// occur given the store's uniqueness invariant, but the scan stays robust
/// to them. Returns 0 only for an empty history.
pub fn longest_streak(entries: &[MoodEntry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort();

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        let gap = (pair[1] - pair[0]).num_days();
        if gap == 1 {
            run += 1;
            longest = longest.max(run);
        } else if gap > 1 {
            run = 1;
        }
        // gap == 0: duplicate date, neither extends nor resets
    }
    longest
}

/// One day in the trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// 1-5 mood value, `None` for days with no entry.
    pub value: Option<u8>,
    /// The logged emoji, `None` for days with no entry.
    pub emoji: Option<String>,
}

/// Produces one point per calendar day for a trailing window of `days`
/// days ending `today` inclusive.
pub fn trend(entries: &[MoodEntry], today: NaiveDate, days: i64) -> Vec<TrendPoint> {
    let by_date: HashMap<NaiveDate, &MoodEntry> =
        entries.iter().map(|e| (e.date, e)).collect();

    (0..days.max(0))
        .map(|offset| {
            let date = today - Duration::days(days - 1 - offset);
            match by_date.get(&date) {
                Some(entry) => TrendPoint {
                    date,
                    value: Some(mood_value(&entry.emoji)),
                    emoji: Some(entry.emoji.clone()),
                },
                None => TrendPoint {
                    date,
                    value: None,
                    emoji: None,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    pub(crate) fn entry(date: &str, emoji: &str) -> MoodEntry {
        MoodEntry {
            date: date.parse().unwrap(),
            emoji: emoji.to_string(),
            note: String::new(),
            tags: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_mood_value_table() {
        assert_eq!(mood_value("😄"), 5);
        assert_eq!(mood_value("😊"), 4);
        assert_eq!(mood_value("😐"), 3);
        assert_eq!(mood_value("😴"), 2);
        assert_eq!(mood_value("😢"), 2);
        assert_eq!(mood_value("😠"), 1);
        assert_eq!(mood_value("🦀"), 3);
    }

    #[test]
    fn test_most_common_mood_empty() {
        assert_eq!(most_common_mood(&[]), None);
    }

    #[test]
    fn test_most_common_mood_counts() {
        let entries = vec![
            entry("2024-03-01", "😊"),
            entry("2024-03-02", "😢"),
            entry("2024-03-03", "😊"),
        ];
        assert_eq!(most_common_mood(&entries), Some("😊"));
    }

    #[test]
    fn test_most_common_mood_tie_breaks_by_first_encountered() {
        let entries = vec![
            entry("2024-03-01", "😢"),
            entry("2024-03-02", "😊"),
            entry("2024-03-03", "😊"),
            entry("2024-03-04", "😢"),
        ];
        // Both have count 2; 😢 appears first in the sequence.
        assert_eq!(most_common_mood(&entries), Some("😢"));
    }

    #[test]
    fn test_current_streak_active_through_today() {
        let entries = vec![
            entry("2024-12-06", "😊"),
            entry("2024-12-07", "😊"),
            entry("2024-12-08", "😊"),
        ];
        assert_eq!(current_streak(&entries, date("2024-12-08")), 3);
    }

    #[test]
    fn test_current_streak_active_through_yesterday() {
        let entries = vec![entry("2024-12-07", "😊"), entry("2024-12-08", "😊")];
        assert_eq!(current_streak(&entries, date("2024-12-09")), 2);
    }

    #[test]
    fn test_current_streak_zero_when_last_entry_too_old() {
        let entries = vec![
            entry("2024-12-06", "😊"),
            entry("2024-12-07", "😊"),
            entry("2024-12-08", "😊"),
        ];
        assert_eq!(current_streak(&entries, date("2024-12-10")), 0);
    }

    #[test]
    fn test_current_streak_stops_at_gap() {
        let entries = vec![
            entry("2024-12-04", "😊"),
            entry("2024-12-05", "😊"),
            // gap on the 6th
            entry("2024-12-07", "😊"),
            entry("2024-12-08", "😊"),
        ];
        assert_eq!(current_streak(&entries, date("2024-12-08")), 2);
    }

    #[test]
    fn test_current_streak_empty() {
        assert_eq!(current_streak(&[], date("2024-12-08")), 0);
    }

    #[test]
    fn test_longest_streak_example() {
        let entries = vec![
            entry("2024-01-01", "😊"),
            entry("2024-01-02", "😊"),
            entry("2024-01-05", "😊"),
            entry("2024-01-06", "😊"),
            entry("2024-01-07", "😊"),
        ];
        assert_eq!(longest_streak(&entries), 3);
    }

    #[test]
    fn test_longest_streak_minimum_one_when_nonempty() {
        assert_eq!(longest_streak(&[entry("2024-01-01", "😊")]), 1);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_longest_streak_ignores_duplicate_dates() {
        let entries = vec![
            entry("2024-01-01", "😊"),
            entry("2024-01-01", "😢"),
            entry("2024-01-02", "😊"),
            entry("2024-01-03", "😊"),
        ];
        assert_eq!(longest_streak(&entries), 3);
    }

    #[test]
    fn test_longest_streak_unsorted_input() {
        let entries = vec![
            entry("2024-01-03", "😊"),
            entry("2024-01-01", "😊"),
            entry("2024-01-02", "😊"),
        ];
        assert_eq!(longest_streak(&entries), 3);
    }

    #[test]
    fn test_trend_window_and_gaps() {
        let entries = vec![entry("2024-12-07", "😄"), entry("2024-12-05", "🦀")];
        let series = trend(&entries, date("2024-12-08"), 5);

        assert_eq!(series.len(), 5);
        assert_eq!(series[0].date, date("2024-12-04"));
        assert_eq!(series[4].date, date("2024-12-08"));

        assert_eq!(series[1].value, Some(3)); // custom emoji -> neutral
        assert_eq!(series[1].emoji.as_deref(), Some("🦀"));
        assert_eq!(series[2].value, None);
        assert_eq!(series[3].value, Some(5));
        assert_eq!(series[4].value, None);
    }

    #[test]
    fn test_trend_empty_history_is_all_gaps() {
        let series = trend(&[], date("2024-12-08"), 3);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.value.is_none()));
    }
}
