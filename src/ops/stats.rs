//! Statistics and analytics reports.

use crate::analytics::insights::weekly_insights;
use crate::analytics::patterns::{weekday_pattern, year_in_review};
use crate::analytics::tags::{popular_tags, tag_frequency};
use crate::analytics::{current_streak, longest_streak, most_common_mood, trend, weekday_name};
use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::{Datelike, NaiveDate};

/// Streaks, totals, and this month's most common mood.
pub fn summary(store: &EntryStore<'_>, today: NaiveDate) -> AppResult<String> {
    let entries = store.get_all()?;
    if entries.is_empty() {
        return Ok("No entries yet. Log your first mood with `moodlog log`.".to_string());
    }

    let month_entries = store.get_for_month(today.year(), today.month())?;
    let month_mood = most_common_mood(&month_entries).unwrap_or("-").to_string();

    Ok(format!(
        "Total entries:    {}\n\
         Current streak:   {} days\n\
         Longest streak:   {} days\n\
         This month:       {} entries, most common mood {}",
        entries.len(),
        current_streak(&entries, today),
        longest_streak(&entries),
        month_entries.len(),
        month_mood
    ))
}

/// Text chart of the trailing mood trend, one row per day.
pub fn trend_chart(store: &EntryStore<'_>, today: NaiveDate, days: i64) -> AppResult<String> {
    let entries = store.get_all()?;
    let series = trend(&entries, today, days);

    let rows: Vec<String> = series
        .iter()
        .map(|point| match (&point.value, &point.emoji) {
            (Some(value), Some(emoji)) => format!(
                "{}  {}  {}",
                point.date,
                emoji,
                "█".repeat(usize::from(*value))
            ),
            _ => format!("{}  ·", point.date),
        })
        .collect();
    Ok(rows.join("\n"))
}

/// Weekly insights, one labeled line each.
pub fn insights_report(store: &EntryStore<'_>, today: NaiveDate) -> AppResult<String> {
    let entries = store.get_all()?;
    let insights = weekly_insights(&entries, today);
    if insights.is_empty() {
        return Ok("Not enough history for insights yet. Log at least 7 entries.".to_string());
    }

    let lines: Vec<String> = insights
        .iter()
        .map(|i| format!("[{}] {}", i.category, i.text))
        .collect();
    Ok(lines.join("\n"))
}

/// The dominant mood for each day of the week.
pub fn weekday_report(store: &EntryStore<'_>) -> AppResult<String> {
    let entries = store.get_all()?;
    let rows: Vec<String> = weekday_pattern(&entries)
        .iter()
        .map(|day| {
            format!(
                "{:<9}  {}  ({} entries)",
                weekday_name(day.weekday),
                day.dominant.as_deref().unwrap_or("-"),
                day.count
            )
        })
        .collect();
    Ok(rows.join("\n"))
}

/// A per-month breakdown for one year plus year totals.
pub fn year_report(store: &EntryStore<'_>, year: i32) -> AppResult<String> {
    let entries = store.get_all()?;
    let review = year_in_review(&entries, year);
    if review.total_entries == 0 {
        return Ok(format!("No entries for {}.", year));
    }

    let mut lines = vec![format!("Year in review: {}", review.year)];
    for month in &review.months {
        let name = NaiveDate::from_ymd_opt(year, month.month, 1)
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default();
        lines.push(format!(
            "{:<10}  {}  ({} entries)",
            name,
            month.dominant.as_deref().unwrap_or("-"),
            month.count
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} entries total; top mood {}",
        review.total_entries,
        review.top_emoji.as_deref().unwrap_or("-")
    ));
    Ok(lines.join("\n"))
}

/// Tag frequencies, with the popular (top five) tags marked.
pub fn tag_report(store: &EntryStore<'_>) -> AppResult<String> {
    let entries = store.get_all()?;
    let ranked = tag_frequency(&entries);
    if ranked.is_empty() {
        return Ok("No tags yet.".to_string());
    }

    let popular = popular_tags(&entries);
    let rows: Vec<String> = ranked
        .iter()
        .map(|(tag, count)| {
            let marker = if popular.iter().any(|(p, _)| p == tag) {
                " *"
            } else {
                ""
            };
            format!("#{}  {}{}", tag, count, marker)
        })
        .collect();
    Ok(format!("{}\n\n* popular tag", rows.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KvStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_summary_empty_store() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        let out = summary(&store, date("2024-12-08")).unwrap();
        assert!(out.contains("No entries yet"));
    }

    #[test]
    fn test_summary_reports_streaks() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        store.save(date("2024-12-06"), "😊", "", None).unwrap();
        store.save(date("2024-12-07"), "😊", "", None).unwrap();
        store.save(date("2024-12-08"), "😊", "", None).unwrap();

        let out = summary(&store, date("2024-12-08")).unwrap();
        assert!(out.contains("Current streak:   3 days"));
        assert!(out.contains("Longest streak:   3 days"));
        assert!(out.contains("most common mood 😊"));
    }

    #[test]
    fn test_trend_chart_marks_gaps() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        store.save(date("2024-12-08"), "😄", "", None).unwrap();

        let out = trend_chart(&store, date("2024-12-08"), 3).unwrap();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].ends_with("·"));
        assert!(rows[2].contains("█████"));
    }

    #[test]
    fn test_insights_report_below_threshold() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        let out = insights_report(&store, date("2024-12-08")).unwrap();
        assert!(out.contains("at least 7"));
    }

    #[test]
    fn test_weekday_report_has_seven_rows() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        let out = weekday_report(&store).unwrap();
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("Monday"));
    }

    #[test]
    fn test_year_report() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        store.save(date("2024-03-01"), "😊", "", None).unwrap();
        store.save(date("2024-03-15"), "😊", "", None).unwrap();
        store.save(date("2024-07-04"), "😢", "", None).unwrap();

        let out = year_report(&store, 2024).unwrap();
        assert!(out.contains("March"));
        assert!(out.contains("3 entries total; top mood 😊"));
    }

    #[test]
    fn test_tag_report_marks_popular() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = EntryStore::new(&kv);
        store
            .save(
                date("2024-12-08"),
                "😊",
                "",
                Some(vec!["work".to_string()]),
            )
            .unwrap();

        let out = tag_report(&store).unwrap();
        assert!(out.contains("#work  1 *"));
    }
}
