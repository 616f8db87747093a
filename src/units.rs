//! Unit/Quantity Normalizer
//!
//! Converts numeric tokens pulled out of a command into one canonical unit per
//! attribute family: millimeters for section sizes and thicknesses, meters for
//! heights, degrees for slopes.
//!
//! The centimeter handling is a magnitude heuristic, not a unit-aware parse:
//! when the command mentions "cm" anywhere and the value is below
//! [`CENTIMETER_THRESHOLD`], the value is read as centimeters and scaled to
//! millimeters. "150x200cm" therefore stays at 150 x 200 mm.

/// Millimeters in one foot (the host runtime's native length unit)
pub const MM_PER_FOOT: f64 = 304.8;

/// Feet in one meter
pub const FEET_PER_METER: f64 = 1000.0 / MM_PER_FOOT;

/// Values at or above this are never rescaled from centimeters
pub const CENTIMETER_THRESHOLD: f64 = 100.0;

/// Whether the (lower-cased) command mentions centimeters at all
pub fn mentions_centimeters(lower: &str) -> bool {
    lower.contains("cm")
}

/// Apply the centimeter heuristic to a single linear magnitude
pub fn to_millimeters(value: f64, lower: &str) -> f64 {
    if mentions_centimeters(lower) && value < CENTIMETER_THRESHOLD {
        value * 10.0
    } else {
        value
    }
}

/// Apply the centimeter heuristic to a rectangular section.
///
/// Only the first dimension decides; when it triggers, both are scaled.
/// Returns `None` when scaling overflows.
pub fn section_to_millimeters(first: i64, second: i64, lower: &str) -> Option<(i64, i64)> {
    if mentions_centimeters(lower) && (first as f64) < CENTIMETER_THRESHOLD {
        Some((first.checked_mul(10)?, second.checked_mul(10)?))
    } else {
        Some((first, second))
    }
}

/// Convert a percentage slope ("pente de 100%") into degrees
pub fn percent_to_degrees(percent: f64) -> f64 {
    (percent / 100.0).atan().to_degrees()
}

pub fn mm_to_feet(mm: f64) -> f64 {
    mm / MM_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Parse a decimal token, accepting a comma as decimal separator.
/// Tokens too large for a finite `f64` do not parse.
pub fn parse_decimal(token: &str) -> Option<f64> {
    token
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse an integer token made of ASCII digits
pub fn parse_integer(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}
