//! Weekly insights derived from the entry history.
//!
//! Insights are short natural-language observations computed from the full
//! history: which weekday tends to be best or worst, the most frequent
//! mood overall, and streak achievements. Nothing is produced until at
//! least seven entries exist, so early insights are not noise.

use crate::analytics::{current_streak, mood_value, most_common_mood, weekday_name};
use crate::constants::{MIN_INSIGHT_ENTRIES, MIN_WEEKDAY_SAMPLES, STREAK_ACHIEVEMENT_DAYS};
use crate::store::MoodEntry;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

/// Presentation category of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightCategory {
    Positive,
    Info,
    Stat,
    Achievement,
}

impl std::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InsightCategory::Positive => "positive",
            InsightCategory::Info => "info",
            InsightCategory::Stat => "stat",
            InsightCategory::Achievement => "achievement",
        };
        f.write_str(label)
    }
}

/// One natural-language observation about the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub category: InsightCategory,
    pub text: String,
}

/// Weekday order used for deterministic best/worst selection.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Computes up to four insights from the entry history.
///
/// Requires at least seven total entries, otherwise returns no insights.
/// Weekday averages use the same 1-5 mood-value mapping as the trend
/// series; a weekday needs at least two samples to qualify as a best/worst
/// candidate. Ties between weekday averages resolve to the earlier weekday
/// in Monday-first order.
pub fn weekly_insights(entries: &[MoodEntry], today: NaiveDate) -> Vec<Insight> {
    if entries.len() < MIN_INSIGHT_ENTRIES {
        debug!(
            "Only {} entries, need {} for insights",
            entries.len(),
            MIN_INSIGHT_ENTRIES
        );
        return Vec::new();
    }

    let mut insights = Vec::new();

    // Per-weekday mood-value averages, Monday-first.
    let mut sums = [0u32; 7];
    let mut counts = [0usize; 7];
    for entry in entries {
        let idx = entry.date.weekday().num_days_from_monday() as usize;
        sums[idx] += u32::from(mood_value(&entry.emoji));
        counts[idx] += 1;
    }

    let average = |idx: usize| sums[idx] as f64 / counts[idx] as f64;
    let candidates: Vec<usize> = (0..7)
        .filter(|&idx| counts[idx] >= MIN_WEEKDAY_SAMPLES)
        .collect();

    let best = candidates
        .iter()
        .copied()
        .reduce(|a, b| if average(b) > average(a) { b } else { a });
    if let Some(best_idx) = best {
        insights.push(Insight {
            category: InsightCategory::Positive,
            text: format!(
                "{}s tend to be your best days (average mood {:.1}/5)",
                weekday_name(WEEK[best_idx]),
                average(best_idx)
            ),
        });

        let worst = candidates
            .iter()
            .copied()
            .reduce(|a, b| if average(b) < average(a) { b } else { a });
        if let Some(worst_idx) = worst {
            if worst_idx != best_idx {
                insights.push(Insight {
                    category: InsightCategory::Info,
                    text: format!(
                        "{}s tend to be your toughest days (average mood {:.1}/5)",
                        weekday_name(WEEK[worst_idx]),
                        average(worst_idx)
                    ),
                });
            }
        }
    }

    if let Some(top) = most_common_mood(entries) {
        let count = entries.iter().filter(|e| e.emoji == top).count();
        let percentage = count as f64 / entries.len() as f64 * 100.0;
        insights.push(Insight {
            category: InsightCategory::Stat,
            text: format!(
                "Your most frequent mood is {} ({:.0}% of all entries)",
                top, percentage
            ),
        });
    }

    let streak = current_streak(entries, today);
    if streak >= STREAK_ACHIEVEMENT_DAYS {
        insights.push(Insight {
            category: InsightCategory::Achievement,
            text: format!("You're on a {}-day logging streak. Keep it up!", streak),
        });
    }

    insights
}
