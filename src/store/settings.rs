//! Typed accessors for process-wide settings.
//!
//! Each setting is an independent key in the key-value store with no
//! relational integrity to the entry collection. Reads fall back to a
//! default on any storage failure, and failed writes are logged no-ops,
//! matching the entry store's degradation policy.

use crate::constants::{
    KEY_CUSTOM_EMOJIS, KEY_DEMO_MODE, KEY_REMINDER, KEY_THEME, THEME_DARK, THEME_LIGHT,
};
use crate::store::kv::KvStore;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// The two supported UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str(THEME_LIGHT),
            Theme::Dark => f.write_str(THEME_DARK),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            THEME_LIGHT => Ok(Theme::Light),
            THEME_DARK => Ok(Theme::Dark),
            other => Err(format!(
                "Unknown theme '{}', expected '{}' or '{}'",
                other, THEME_LIGHT, THEME_DARK
            )),
        }
    }
}

/// Settings facade over the key-value store.
pub struct Settings<'a> {
    kv: &'a KvStore,
}

impl<'a> Settings<'a> {
    pub fn new(kv: &'a KvStore) -> Self {
        Settings { kv }
    }

    /// Returns the configured theme, defaulting to light.
    pub fn theme(&self) -> Theme {
        self.read(KEY_THEME)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.write(KEY_THEME, &theme.to_string());
    }

    /// Whether the daily logging reminder is enabled.
    pub fn reminder_enabled(&self) -> bool {
        self.read(KEY_REMINDER).as_deref() == Some("true")
    }

    pub fn set_reminder_enabled(&self, enabled: bool) {
        self.write(KEY_REMINDER, if enabled { "true" } else { "false" });
    }

    /// Returns the user-defined custom emoji list, in insertion order.
    pub fn custom_emojis(&self) -> Vec<String> {
        let Some(text) = self.read(KEY_CUSTOM_EMOJIS) else {
            return Vec::new();
        };
        match serde_json::from_str(&text) {
            Ok(list) => list,
            Err(e) => {
                warn!("Corrupt custom emoji list, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Adds an emoji to the custom list. Returns `false` if it was already
    /// present or blank.
    pub fn add_custom_emoji(&self, emoji: &str) -> bool {
        let emoji = emoji.trim();
        if emoji.is_empty() {
            return false;
        }
        let mut list = self.custom_emojis();
        if list.iter().any(|e| e == emoji) {
            return false;
        }
        list.push(emoji.to_string());
        match serde_json::to_string(&list) {
            Ok(text) => self.write(KEY_CUSTOM_EMOJIS, &text),
            Err(e) => warn!("Failed to encode custom emoji list, dropping write: {}", e),
        }
        true
    }

    /// Whether the store currently holds generated demo data.
    pub fn demo_mode(&self) -> bool {
        self.read(KEY_DEMO_MODE).as_deref() == Some("true")
    }

    pub fn set_demo_mode(&self, enabled: bool) {
        self.write(KEY_DEMO_MODE, if enabled { "true" } else { "false" });
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read setting '{}', using default: {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.kv.set(key, value) {
            warn!("Failed to write setting '{}', dropping write: {}", key, e);
        }
    }
}
