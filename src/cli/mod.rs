//! Command-line interface for the moodlog application.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, DEFAULT_TREND_DAYS,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// The moodlog subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a mood for a day (defaults to today)
    Log {
        /// The mood emoji to record
        emoji: String,
        /// Free-text note for the day
        #[clap(short, long, default_value = "")]
        note: String,
        /// Comma-separated tags; replaces the entry's existing tags
        #[clap(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
        /// Date to log for (YYYY-MM-DD or YYYYMMDD)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Show one day's entry, or a whole month
    Show {
        /// Date to show (YYYY-MM-DD or YYYYMMDD)
        #[clap(short, long, conflicts_with = "month")]
        date: Option<String>,
        /// Month to show (YYYY-MM)
        #[clap(short, long)]
        month: Option<String>,
    },

    /// Delete the entry for a date
    Delete {
        /// Date to delete (YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// Export all entries as CSV
    Export {
        /// Write to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from a CSV file, merging into the journal
    Import {
        /// CSV file to import
        file: PathBuf,
    },

    /// Show streaks and this month's summary
    Stats,

    /// Show the mood trend for a trailing window of days
    Trend {
        /// Window length in days
        #[clap(short, long, default_value_t = DEFAULT_TREND_DAYS)]
        days: i64,
    },

    /// Show weekly insights derived from your history
    Insights,

    /// Show the dominant mood for each day of the week
    Weekdays,

    /// Show a year in review (defaults to the current year)
    Year {
        /// Year to review
        year: Option<i32>,
    },

    /// List tag frequencies, or add/remove a tag on one entry
    Tags {
        /// Entry date to modify (required with --add/--remove)
        #[clap(short, long)]
        date: Option<String>,
        /// Tag to add to the entry
        #[clap(long, requires = "date", conflicts_with = "remove")]
        add: Option<String>,
        /// Tag to remove from the entry
        #[clap(long, requires = "date")]
        remove: Option<String>,
    },

    /// Show or set the theme
    Theme {
        /// Theme to switch to
        #[clap(value_parser = ["light", "dark"])]
        theme: Option<String>,
    },

    /// Show or set the daily reminder flag
    Remind {
        /// Turn the reminder on or off
        #[clap(value_parser = ["on", "off"])]
        state: Option<String>,
    },

    /// Manage custom mood emoji
    Emoji {
        #[clap(subcommand)]
        action: EmojiCommand,
    },

    /// Replace the journal with generated demo data
    Demo,

    /// Delete every entry
    Clear {
        /// Confirm the wipe without prompting
        #[clap(long)]
        yes: bool,
    },
}

/// Custom emoji subcommands.
#[derive(Subcommand, Debug)]
pub enum EmojiCommand {
    /// Add an emoji to the custom mood set
    Add { emoji: String },
    /// List custom mood emoji
    List,
}

/// Parses a date string in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

/// Parses a month string in YYYY-MM format into `(year, month)`.
pub fn parse_month(month_str: &str) -> Option<(i32, u32)> {
    use chrono::Datelike;
    NaiveDate::parse_from_str(&format!("{}-01", month_str), DATE_FORMAT_ISO)
        .ok()
        .map(|d| (d.year(), d.month()))
}
