use std::time::Duration;

use crate::error::{AppError, AppResult};

pub(super) fn parse_positive_u32(s: &str) -> AppResult<u32> {
    let value: u32 = s.trim().parse().map_err(|err| {
        AppError::Message(format!("Expected a positive integer, got '{}': {}", s, err))
    })?;
    if value == 0 {
        return Err("Value must be greater than zero.".into());
    }
    Ok(value)
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<usize> {
    let value: usize = s.trim().parse().map_err(|err| {
        AppError::Message(format!("Expected a positive integer, got '{}': {}", s, err))
    })?;
    if value == 0 {
        return Err("Value must be greater than zero.".into());
    }
    Ok(value)
}

/// Parses durations like `500ms`, `30s`, `2m`, `1h`; a bare number is seconds.
pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    let digits_len = value.chars().take_while(|ch| ch.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(AppError::Message(format!("Invalid duration '{}'.", s)));
    }

    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::Message(format!("Invalid duration number '{}': {}", s, err))
    })?;

    let duration = match unit_part.trim() {
        "ms" => Duration::from_millis(number),
        "" | "s" => Duration::from_secs(number),
        "m" => Duration::from_secs(number.saturating_mul(60)),
        "h" => Duration::from_secs(number.saturating_mul(3_600)),
        other => {
            return Err(AppError::Message(format!(
                "Invalid duration unit '{}' (expected ms, s, m, or h).",
                other
            )));
        }
    };

    if duration.is_zero() {
        return Err("Duration must be greater than zero.".into());
    }
    Ok(duration)
}
