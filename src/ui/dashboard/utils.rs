//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventType;
use crate::logging::LogLevel;
use ratatui::prelude::Color;

/// Teal used for table headers and the time card.
pub const TEAL_LIGHT: Color = Color::Rgb(123, 178, 153);
/// Darker teal used for the cost card.
pub const TEAL_DARK: Color = Color::Rgb(77, 131, 121);
/// Accent used for titles and borders.
pub const TEAL_ACCENT: Color = Color::Rgb(56, 122, 121);

/// Get a ratatui color for an activity log entry
pub fn get_event_color(event_type: EventType, log_level: LogLevel) -> Color {
    match (event_type, log_level) {
        (EventType::Refresh, _) => TEAL_LIGHT,
        (EventType::StateChange, LogLevel::Warn | LogLevel::Error) => Color::LightRed,
        (EventType::StateChange, _) => Color::LightGreen,
        (EventType::Ignored, _) => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD and HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, clock);
        }
    }
    timestamp.to_string()
}

/// Format a duration in whole seconds as `1h 2m 3s`, dropping leading zero units.
pub fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
