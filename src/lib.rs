/*!
# Moodlog

Moodlog is a personal mood journal: one entry per calendar day (an emoji,
an optional note, optional tags), with descriptive statistics derived from
the accumulated history. All state lives in a local key-value store; there
is no server, no multi-user concept, and no synchronization.

## Core Features

- Log one mood per day, with notes and tags
- Current and longest logging streaks
- Mood trend over a trailing window of days
- Weekly insights, day-of-week patterns, and a year in review
- CSV export, and CSV import with merge semantics

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading
- `errors`: Error handling infrastructure
- `store`: The key-value store, entry collection, and settings
- `csv`: The CSV exchange codec
- `analytics`: Pure functions deriving statistics from the history
- `ops`: Command implementations coordinating the above

## Usage Example

```no_run
use moodlog::store::{EntryStore, KvStore};
use moodlog::analytics;
use chrono::Local;

fn main() -> moodlog::AppResult<()> {
    let kv = KvStore::open(std::path::Path::new("/tmp/moodlog.db"))?;
    let store = EntryStore::new(&kv);

    let today = Local::now().date_naive();
    store.save(today, "😊", "A good day", None)?;

    let entries = store.get_all()?;
    println!("Current streak: {}", analytics::current_streak(&entries, today));
    Ok(())
}
```
*/

/// Pure analytics over the entry history
pub mod analytics;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// CSV exchange codec
pub mod csv;
/// Error types and utilities for error handling
pub mod errors;
/// Command implementations
pub mod ops;
/// Persistent state: key-value store, entries, settings
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use store::{CorruptDataPolicy, EntryStore, KvStore, MoodEntry, Settings, Theme};
