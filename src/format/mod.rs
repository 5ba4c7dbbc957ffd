// Author: Dustin Pilgrim
// License: MIT

use crate::StatusError;


/// Decimal places used by [`format_size`].
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// A fixed step and the ordered unit labels a value climbs through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLadder {
    step: f64,
    units: &'static [&'static str],
}

/// Byte counts: B, kB, MB, GB, TB with a step of 1024.
pub const SIZE_LADDER: UnitLadder = UnitLadder {
    step: 1024.0,
    units: &["B", "kB", "MB", "GB", "TB"],
};

/// Frequencies in MHz: MHz, GHz, THz with a step of 1000.
pub const FREQUENCY_LADDER: UnitLadder = UnitLadder {
    step: 1000.0,
    units: &["MHz", "GHz", "THz"],
};

impl UnitLadder {
    /// Divide `value` by the step until it drops below it or the top unit is reached.
    ///
    /// Values that are already below the step (including negatives and NaN)
    /// come back untouched with the base unit.
    pub fn scale(&self, value: f64) -> (f64, &'static str) {
        let mut value = value;
        let mut idx = 0;
        // Clamp at the top unit: 1024 TB stays "1024.00 TB" rather than
        // being divided once more and mislabelled "1.00 TB".
        while value >= self.step && idx + 1 < self.units.len() {
            value /= self.step;
            idx += 1;
        }
        (value, self.units[idx])
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn units(&self) -> &'static [&'static str] {
        self.units
    }

    pub fn format(&self, value: f64, decimal_places: usize) -> String {
        let (scaled, unit) = self.scale(value);
        format!("{:.*} {}", decimal_places, scaled, unit)
    }
}

/// Format a byte count with two decimal places, e.g. `1536.0` -> `"1.50 kB"`.
pub fn format_size(size: f64) -> String {
    format_size_with_precision(size, DEFAULT_DECIMAL_PLACES)
}

pub fn format_size_with_precision(size: f64, decimal_places: usize) -> String {
    SIZE_LADDER.format(size, decimal_places)
}

/// Format a frequency given in MHz, rounded to a whole number, e.g. `1000.0` -> `"1 GHz"`.
pub fn format_frequency(freq: f64) -> String {
    FREQUENCY_LADDER.format(freq, 0)
}

/// Like [`format_size_with_precision`] but rejects negative and non-finite sizes.
pub fn try_format_size(size: f64, decimal_places: usize) -> Result<String, StatusError> {
    check_magnitude("size", size)?;
    Ok(format_size_with_precision(size, decimal_places))
}

/// Like [`format_frequency`] but rejects negative and non-finite frequencies.
pub fn try_format_frequency(freq: f64) -> Result<String, StatusError> {
    check_magnitude("frequency", freq)?;
    Ok(format_frequency(freq))
}

fn check_magnitude(what: &str, value: f64) -> Result<(), StatusError> {
    if !value.is_finite() {
        return Err(StatusError::InvalidInput {
            message: format!("{} must be finite, got {}", what, value),
            hint: None,
            code: Some(200),
        });
    }
    if value < 0.0 {
        return Err(StatusError::InvalidInput {
            message: format!("{} must not be negative, got {}", what, value),
            hint: Some("Pass an absolute magnitude".into()),
            code: Some(201),
        });
    }
    Ok(())
}
