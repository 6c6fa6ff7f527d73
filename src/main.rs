/*!
# Moodlog - A Personal Mood Journal

Moodlog is a command-line tool for recording one mood per calendar day and
exploring the statistics that fall out of the history: streaks, trends,
weekly insights, day-of-week patterns, and year-in-review summaries.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```text
moodlog log 😊 --note "Had a great day!" --tags work,gym
moodlog stats
moodlog trend --days 14
moodlog export --output moods.csv
```

## Configuration

- `MOODLOG_DIR`: Directory holding the data store (defaults to
  `~/.local/share/moodlog`)
- `MOODLOG_LOG`: Log filter (defaults to `warn`)
*/

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use moodlog::cli::{self, CliArgs, Command, EmojiCommand};
use moodlog::config;
use moodlog::constants::{DEFAULT_LOG_LEVEL, ENV_VAR_LOG_FILTER};
use moodlog::errors::{AppError, AppResult};
use moodlog::ops;
use moodlog::store::{EntryStore, KvStore, Settings};
use moodlog::Config;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the moodlog application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads configuration and opens the data store
/// 3. Obtains the current date once, so every computation that needs
///    "today" sees the same value
/// 4. Dispatches to the requested operation and prints its output
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    info!("Starting moodlog");

    // Obtain the current date once at the beginning.
    let today = Local::now().date_naive();

    let config = Config::load()?;
    debug!("Configuration: {:?}", config);
    config::ensure_data_dir_exists(&config.data_dir)?;

    let kv = KvStore::open(&config.db_path())?;
    let store = EntryStore::new(&kv);
    let settings = Settings::new(&kv);

    let output = run_command(args.command, &store, &settings, today)?;
    println!("{}", output);
    Ok(())
}

/// Dispatches one parsed command and returns the text to print.
fn run_command(
    command: Command,
    store: &EntryStore<'_>,
    settings: &Settings<'_>,
    today: NaiveDate,
) -> AppResult<String> {
    match command {
        Command::Log {
            emoji,
            note,
            tags,
            date,
        } => {
            let date = resolve_date(date.as_deref(), today)?;
            ops::entry::log_entry(store, date, &emoji, &note, tags)
        }

        Command::Show { date, month } => match month {
            Some(month_str) => {
                let (year, month) = cli::parse_month(&month_str).ok_or_else(|| {
                    AppError::Date(format!("'{}' is not a valid YYYY-MM month", month_str))
                })?;
                ops::entry::show_month(store, year, month)
            }
            None => {
                let date = resolve_date(date.as_deref(), today)?;
                ops::entry::show_day(store, date)
            }
        },

        Command::Delete { date } => {
            let date = resolve_date(Some(&date), today)?;
            ops::entry::delete_entry(store, date)
        }

        Command::Export { output } => ops::transfer::export_csv(store, output.as_deref()),
        Command::Import { file } => ops::transfer::import_csv(store, &file),

        Command::Stats => ops::stats::summary(store, today),
        Command::Trend { days } => ops::stats::trend_chart(store, today, days),
        Command::Insights => ops::stats::insights_report(store, today),
        Command::Weekdays => ops::stats::weekday_report(store),
        Command::Year { year } => ops::stats::year_report(store, year.unwrap_or(today.year())),

        Command::Tags { date, add, remove } => {
            if let Some(tag) = add {
                let date = resolve_date(date.as_deref(), today)?;
                Ok(if store.add_tag(date, &tag)? {
                    format!("Added #{} to {}.", tag.trim().to_lowercase(), date)
                } else {
                    format!("Nothing added; no entry for {} or tag already present.", date)
                })
            } else if let Some(tag) = remove {
                let date = resolve_date(date.as_deref(), today)?;
                Ok(if store.remove_tag(date, &tag)? {
                    format!("Removed #{} from {}.", tag.trim().to_lowercase(), date)
                } else {
                    format!("Nothing removed; tag not present on {}.", date)
                })
            } else {
                ops::stats::tag_report(store)
            }
        }

        Command::Theme { theme } => Ok(ops::prefs::theme(settings, theme.as_deref())),
        Command::Remind { state } => Ok(ops::prefs::reminder(settings, state.as_deref())),
        Command::Emoji { action } => Ok(match action {
            EmojiCommand::Add { emoji } => ops::prefs::add_custom_emoji(settings, &emoji),
            EmojiCommand::List => ops::prefs::list_custom_emojis(settings),
        }),

        Command::Demo => ops::demo::load_demo_data(store, settings, today),

        Command::Clear { yes } => {
            if yes {
                ops::entry::clear_entries(store)
            } else {
                Ok("This deletes every entry. Re-run with --yes to confirm.".to_string())
            }
        }
    }
}

/// Resolves an optional user-supplied date string, defaulting to today.
fn resolve_date(date_str: Option<&str>, today: NaiveDate) -> AppResult<NaiveDate> {
    match date_str {
        None => Ok(today),
        Some(s) => cli::parse_date(s)
            .map_err(|e| AppError::Date(format!("'{}' could not be parsed: {}", s, e))),
    }
}

/// Initializes tracing to stderr, honoring `MOODLOG_LOG` with a quiet
/// default. `--verbose` raises the default to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter = EnvFilter::try_from_env(ENV_VAR_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
