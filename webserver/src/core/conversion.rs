//! Temperature unit conversion

use regex::Regex;
use std::sync::OnceLock;

/// Longest decimal literal accepted at the start of a submitted number
const NUMBER_PREFIX_PATTERN: &str = r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)";

/// Magnitudes at or above this print in exponent form
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitudes below this print in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

static NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();

fn number_prefix() -> &'static Regex {
    NUMBER_PREFIX.get_or_init(|| Regex::new(NUMBER_PREFIX_PATTERN).expect("number prefix pattern is a valid regex"))
}

/// Result of converting one Fahrenheit reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub fahrenheit: f64,
    pub celsius: f64,
}

impl Conversion {
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self {
            fahrenheit,
            celsius: fahrenheit_to_celsius(fahrenheit),
        }
    }
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

/// Parse the leading decimal literal of a submitted number.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `98.6F`
/// reads as 98.6. Only the exact word `Infinity` names an infinity. Input
/// with no numeric prefix becomes NaN.
pub fn parse_number(raw: &str) -> f64 {
    let Some(found) = number_prefix().find(raw.trim_start()) else {
        return f64::NAN;
    };

    match found.as_str().trim_start_matches('+') {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        literal => literal.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Shortest round-trip rendering of a number for display.
///
/// Integral values print without a fraction, NaN as `NaN`, infinities as
/// `Infinity` / `-Infinity`, and negative zero as `0`. Very large or very
/// small magnitudes switch to exponent form (`1e+21`, `1e-7`).
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_UPPER || value.abs() < EXPONENT_LOWER {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => formatted,
    }
}
