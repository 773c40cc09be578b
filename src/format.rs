//! Display helpers

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

const LINK_DISPLAY_CHARS: usize = 50;

/// Shorten a result URL for the green line under the title
pub fn truncate_link(link: &str) -> String {
    if link.chars().count() > LINK_DISPLAY_CHARS {
        let head: String = link.chars().take(LINK_DISPLAY_CHARS).collect();
        format!("{}...", head)
    } else {
        link.to_string()
    }
}

/// "14:05" under a chat bubble
pub fn format_clock<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%H:%M").to_string()
}

/// "2025-01-02, 03:04:05" in the history list
pub fn format_history_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%Y-%m-%d, %H:%M:%S").to_string()
}
