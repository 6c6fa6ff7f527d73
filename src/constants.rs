//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal mood journal with streaks, trends, and insights";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the data store within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodlog";
/// File name of the key-value database inside the data directory.
pub const DB_FILE_NAME: &str = "moodlog.db";

// Persistent Storage Keys
/// Key under which the full entry collection is stored as JSON.
pub const KEY_ENTRIES: &str = "mood_entries";
/// Key for the theme setting.
pub const KEY_THEME: &str = "theme";
/// Key for the reminder-enabled flag.
pub const KEY_REMINDER: &str = "reminder_enabled";
/// Key for the user-defined custom emoji list (JSON array).
pub const KEY_CUSTOM_EMOJIS: &str = "custom_emojis";
/// Key for the demo-mode flag.
pub const KEY_DEMO_MODE: &str = "demo_mode";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Mood Scale
/// The default mood set with its 1-5 numeric mapping, best to worst.
/// Unmapped (custom) emoji fall back to [`NEUTRAL_MOOD_VALUE`].
pub const DEFAULT_MOODS: &[(&str, u8)] = &[
    ("😄", 5),
    ("😊", 4),
    ("😐", 3),
    ("😴", 2),
    ("😰", 2),
    ("😢", 2),
    ("😠", 1),
];
/// Numeric mood value assigned to emoji outside the default set.
pub const NEUTRAL_MOOD_VALUE: u8 = 3;

// Analytics Parameters
/// Default trailing window for the trend series, in days.
pub const DEFAULT_TREND_DAYS: i64 = 30;
/// Number of top tags reported as "popular".
pub const POPULAR_TAG_LIMIT: usize = 5;
/// Minimum number of total entries before weekly insights are produced.
pub const MIN_INSIGHT_ENTRIES: usize = 7;
/// Minimum samples a weekday needs to qualify as a best/worst candidate.
pub const MIN_WEEKDAY_SAMPLES: usize = 2;
/// Current-streak length that earns an achievement insight.
pub const STREAK_ACHIEVEMENT_DAYS: u32 = 7;

// CSV Exchange Format
/// Header row written on export; import matches column names
/// case-insensitively and ignores their order.
pub const CSV_HEADER: &str = "Date,Emoji,Note";

// Settings Values
/// Theme identifier for the light theme.
pub const THEME_LIGHT: &str = "light";
/// Theme identifier for the dark theme.
pub const THEME_DARK: &str = "dark";

// Demo Data
/// Number of trailing days covered by the generated demo history.
pub const DEMO_DAYS: i64 = 60;

// Logging Configuration
/// Environment variable controlling the log filter.
pub const ENV_VAR_LOG_FILTER: &str = "MOODLOG_LOG";
/// Default log level when no filter is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
