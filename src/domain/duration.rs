// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration literal parsing.
//!
//! Duration fields accept literals such as `300ms`, `1.5h` or `2h45m30s`: an
//! optional sign followed by one or more `<decimal><unit>` components. Valid
//! units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The bare
//! literal `0` needs no unit.

use std::time::Duration;
use thiserror::Error;

/// Largest representable duration in nanoseconds (the signed 64-bit range).
const MAX_NANOS: u64 = i64::MAX as u64;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Error returned when a duration literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    /// The literal is empty or has no digits where a number is expected.
    #[error("invalid duration literal '{0}'")]
    Invalid(String),

    /// A component is missing its unit.
    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),

    /// A component uses an unknown unit.
    #[error("unknown unit '{unit}' in duration '{literal}'")]
    UnknownUnit {
        /// The unrecognised unit
        unit: String,
        /// The full literal
        literal: String,
    },

    /// The literal exceeds the representable range.
    #[error("duration '{0}' out of range")]
    Overflow(String),

    /// The literal is negative; `std::time::Duration` cannot hold it.
    #[error("negative duration '{0}'")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Splits the leading run of ASCII digits off `s`.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s.split_at(end)
}

/// Parses a duration literal into a [`Duration`].
///
/// # Examples
///
/// ```
/// use hexbind::domain::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(literal: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(literal.to_string());
    let overflow = || DurationParseError::Overflow(literal.to_string());

    let mut rest = literal;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_end = after_fraction
            .char_indices()
            .find(|(_, c)| *c == '.' || c.is_ascii_digit())
            .map_or(after_fraction.len(), |(i, _)| i);
        if unit_end == 0 {
            return Err(DurationParseError::MissingUnit(literal.to_string()));
        }
        let (unit, remainder) = after_fraction.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            literal: literal.to_string(),
        })?;

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut component = whole_value.checked_mul(scale).ok_or_else(overflow)?;

        // Excess fraction digits beyond what u64 can hold only lose precision.
        let mut fraction_value: u64 = 0;
        let mut fraction_scale: f64 = 1.0;
        for digit in fraction.bytes() {
            match fraction_value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            {
                Some(next) => {
                    fraction_value = next;
                    fraction_scale *= 10.0;
                }
                None => break,
            }
        }
        if fraction_value > 0 {
            let extra = (fraction_value as f64 * (scale as f64 / fraction_scale)) as u64;
            component = component.checked_add(extra).ok_or_else(overflow)?;
        }

        total = total.checked_add(component).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
        rest = remainder;
    }

    if negative && total > 0 {
        return Err(DurationParseError::Negative(literal.to_string()));
    }
    Ok(Duration::from_nanos(total))
}
