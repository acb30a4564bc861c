//! Locale-aware parsing of amounts and period keys.
//!
//! Two deliberate failure policies live here, and they are different:
//!
//! - Amounts are **fail-open**: a malformed cell coerces to `0.0` so that a
//!   single bad record cannot blank an entire chart.
//! - Period keys are **fail-loud**: an unplaceable point must not be silently
//!   misfiled into the wrong month, so the month parsers return [`ParseError`].

use serde_json::Value;

use crate::error::ParseError;
use crate::types::CanonicalMonth;

/// Parse a loosely-typed amount cell into a finite `f64`.
///
/// Accepts JSON numbers directly, and strings in either German locale
/// formatting (`"1.234,56 €"` → `1234.56`) or plain machine formatting
/// (`"42"`, `"42.5"`). Never fails: null, empty, or unparseable input
/// yields `0.0`, and the result is never NaN or infinite.
#[must_use]
pub fn parse_locale_amount(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_amount_str(s),
        _ => 0.0,
    }
}

/// String-only inner parser behind [`parse_locale_amount`]; same policy.
///
/// Heuristic for the separator ambiguity: a comma anywhere means German
/// convention (dots are thousands grouping, the comma is the decimal mark);
/// multiple dots without a comma also mean grouping; otherwise the string is
/// taken as a plain machine-formatted number.
#[must_use]
pub fn parse_amount_str(raw: &str) -> f64 {
    // Strip currency symbols, whitespace, and any other decoration.
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let machine = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if cleaned.matches('.').count() > 1 {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    machine
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a compact `MM.YYYY` period key into a [`CanonicalMonth`].
///
/// # Errors
/// Returns [`ParseError`] unless the input is exactly two dot-separated
/// numeric groups with a zero-padded month in 01–12 and a 4-digit year.
/// ISO-form input (`"2025-02"`) is rejected here on purpose.
pub fn parse_compact_month(raw: &str) -> Result<CanonicalMonth, ParseError> {
    let (mm, yyyy) = raw.split_once('.').ok_or_else(|| ParseError::new(raw))?;
    if mm.len() != 2
        || yyyy.len() != 4
        || !mm.bytes().all(|b| b.is_ascii_digit())
        || !yyyy.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseError::new(raw));
    }
    let month: u8 = mm.parse().map_err(|_| ParseError::new(raw))?;
    let year: i32 = yyyy.parse().map_err(|_| ParseError::new(raw))?;
    CanonicalMonth::new(year, month).map_err(|_| ParseError::new(raw))
}

/// Parse an ISO `YYYY-MM` month key into a [`CanonicalMonth`].
///
/// The forecast endpoint is the one documented producer of this form; every
/// other period field travels as `MM.YYYY`.
///
/// # Errors
/// Returns [`ParseError`] unless the input is a 4-digit year and a
/// zero-padded month in 01–12 separated by a single dash.
pub fn parse_iso_month(raw: &str) -> Result<CanonicalMonth, ParseError> {
    let (yyyy, mm) = raw.split_once('-').ok_or_else(|| ParseError::new(raw))?;
    if yyyy.len() != 4
        || mm.len() != 2
        || !yyyy.bytes().all(|b| b.is_ascii_digit())
        || !mm.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseError::new(raw));
    }
    let year: i32 = yyyy.parse().map_err(|_| ParseError::new(raw))?;
    let month: u8 = mm.parse().map_err(|_| ParseError::new(raw))?;
    CanonicalMonth::new(year, month).map_err(|_| ParseError::new(raw))
}
