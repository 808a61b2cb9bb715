//! Digital clock formatting and parsing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    #[error("clock value is empty")]
    Empty,

    #[error("clock value '{0}' has more than three fields")]
    TooManyFields(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("{field} must be below 60, got {value}")]
    FieldOutOfRange { field: &'static str, value: u64 },
}

/// Format a millisecond count as `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Every field, hours included, is
/// zero-padded to two digits; hours are not wrapped.
pub fn format_clock(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse `H:MM:SS`, `MM:SS` or `SS` into whole seconds
pub fn parse_clock(text: &str) -> Result<u64, ClockParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClockParseError::Empty);
    }

    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() > 3 {
        return Err(ClockParseError::TooManyFields(text.to_string()));
    }

    let mut numbers = fields
        .iter()
        .map(|field| {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ClockParseError::InvalidNumber(field.to_string()));
            }
            field
                .parse::<u64>()
                .map_err(|_| ClockParseError::InvalidNumber(field.to_string()))
        })
        .collect::<Result<Vec<u64>, _>>()?;

    // Right-align so the last field is always seconds
    while numbers.len() < 3 {
        numbers.insert(0, 0);
    }
    let (hours, minutes, seconds) = (numbers[0], numbers[1], numbers[2]);

    // A lone seconds field may exceed a minute
    if fields.len() > 1 && seconds >= 60 {
        return Err(ClockParseError::FieldOutOfRange { field: "seconds", value: seconds });
    }
    if fields.len() > 2 && minutes >= 60 {
        return Err(ClockParseError::FieldOutOfRange { field: "minutes", value: minutes });
    }

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| ClockParseError::InvalidNumber(text.to_string()))
}
