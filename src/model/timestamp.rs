// File: ./src/model/timestamp.rs
// Date-time formats for user input and for display.
use crate::error::CommandError;
use chrono::NaiveDateTime;

/// What users type after `/by`, `/from` and `/to`: `2/12/2024 18:00`.
/// Leading zeros are optional.
pub const INPUT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// What `render()` prints: `Dec 02 2024 18:00`.
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, CommandError> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, INPUT_FORMAT)
        .map_err(|_| CommandError::InvalidDateFormat(text.to_string()))
}

pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

pub(crate) fn parse_display(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DISPLAY_FORMAT).ok()
}
