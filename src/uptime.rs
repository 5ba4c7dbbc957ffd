// Author: Dustin Pilgrim
// License: MIT

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::TimeDelta;

use crate::StatusError;

/// Kernel pseudo-file whose first token is the uptime in seconds.
pub const UPTIME_PATH: &str = "/proc/uptime";

/// Read the system uptime and render it as a phrase like `"3 hours"`.
pub fn get_uptime() -> Result<String, StatusError> {
    get_uptime_from(UPTIME_PATH)
}

pub fn get_uptime_from<P: AsRef<Path>>(path: P) -> Result<String, StatusError> {
    let seconds = read_uptime_seconds(path)?;
    Ok(humanize_uptime(seconds))
}

/// Read the first line of an uptime file and return its first field as seconds.
///
/// The file handle is dropped before returning, on success and on error.
pub fn read_uptime_seconds<P: AsRef<Path>>(path: P) -> Result<f64, StatusError> {
    let path = path.as_ref();
    let file_error = |e: std::io::Error| StatusError::FileError {
        message: format!("Failed to read uptime: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Uptime is only available where /proc is mounted".into()),
        code: Some(100),
    };

    let mut line = String::new();
    {
        let file = File::open(path).map_err(file_error)?;
        BufReader::new(file).read_line(&mut line).map_err(file_error)?;
    }

    parse_uptime(&line)
}

/// Parse the leading seconds field of an uptime line such as `"3661.0 1234.5"`.
pub fn parse_uptime(line: &str) -> Result<f64, StatusError> {
    let token = line.split_whitespace().next().ok_or_else(|| StatusError::ParseError {
        message: "Uptime file is empty".into(),
        input: line.to_string(),
        hint: None,
        code: Some(101),
    })?;

    let seconds: f64 = token.parse().map_err(|e| StatusError::ParseError {
        message: format!("Uptime '{}' is not a number: {}", token, e),
        input: line.trim_end().to_string(),
        hint: Some("Expected '<uptime seconds> <idle seconds>'".into()),
        code: Some(102),
    })?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(StatusError::ParseError {
            message: format!("Uptime must be a finite, non-negative number of seconds, got {}", token),
            input: line.trim_end().to_string(),
            hint: None,
            code: Some(103),
        });
    }

    Ok(seconds)
}

const DAYS_PER_MONTH: f64 = 30.5;

/// Describe an elapsed number of seconds in words, e.g. `"50 minutes"` or `"3 hours"`.
///
/// Counts are rounded down. Under a day the phrase comes from the seconds,
/// under a year from whole days and 30.5-day months, and beyond that from years.
pub fn humanize_uptime(seconds: f64) -> String {
    let millis = (seconds * 1000.0) as i64;
    let delta = TimeDelta::try_milliseconds(millis).unwrap_or(TimeDelta::MAX).abs();

    let total_days = delta.num_days();
    let years = total_days / 365;
    let days = total_days % 365;
    let months = (days as f64 / DAYS_PER_MONTH) as i64;

    if years == 0 && days == 0 {
        let secs = (delta - TimeDelta::days(total_days)).num_seconds();
        return match secs {
            0 => "a moment".to_string(),
            1 => "a second".to_string(),
            2..=59 => format!("{} seconds", secs),
            60..=119 => "a minute".to_string(),
            120..=3599 => format!("{} minutes", delta.num_minutes()),
            3600..=7199 => "an hour".to_string(),
            _ => format!("{} hours", delta.num_hours()),
        };
    }

    match (years, months, days) {
        (0, _, 1) => "a day".to_string(),
        (0, 0, _) => format!("{} days", days),
        (0, 1, _) => "a month".to_string(),
        (0, _, _) => format!("{} months", months),
        (1, 0, 0) => "a year".to_string(),
        (1, 0, _) => format!("1 year, {} days", days),
        (1, 1, _) => "1 year, 1 month".to_string(),
        (1, _, _) => format!("1 year, {} months", months),
        _ => format!("{} years", years),
    }
}
