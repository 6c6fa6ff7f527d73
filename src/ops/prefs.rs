//! Theme, reminder, and custom emoji operations.

use crate::store::{Settings, Theme};

/// Shows or sets the theme.
pub fn theme(settings: &Settings<'_>, value: Option<&str>) -> String {
    match value {
        Some(value) => {
            // The CLI restricts the value to "light"/"dark" already.
            let theme: Theme = value.parse().unwrap_or_default();
            settings.set_theme(theme);
            format!("Theme set to {}.", theme)
        }
        None => format!("Theme: {}", settings.theme()),
    }
}

/// Shows or sets the daily reminder flag.
pub fn reminder(settings: &Settings<'_>, state: Option<&str>) -> String {
    match state {
        Some(state) => {
            let enabled = state == "on";
            settings.set_reminder_enabled(enabled);
            format!("Reminder {}.", if enabled { "enabled" } else { "disabled" })
        }
        None => format!(
            "Reminder: {}",
            if settings.reminder_enabled() {
                "on"
            } else {
                "off"
            }
        ),
    }
}

/// Adds an emoji to the custom mood set.
pub fn add_custom_emoji(settings: &Settings<'_>, emoji: &str) -> String {
    if settings.add_custom_emoji(emoji) {
        format!("Added {} to your custom moods.", emoji.trim())
    } else {
        format!("{} is already a custom mood.", emoji.trim())
    }
}

/// Lists the custom mood set.
pub fn list_custom_emojis(settings: &Settings<'_>) -> String {
    let list = settings.custom_emojis();
    if list.is_empty() {
        "No custom moods yet.".to_string()
    } else {
        list.join(" ")
    }
}
