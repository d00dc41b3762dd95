//! ISO 8601 duration parsing and elapsed-time formatting.
//!
//! The provider reports video lengths as ISO 8601 durations (`PT1H2M3S`,
//! `P1DT2H`, `P0D`). These are parsed into a [`Duration`] and rendered as
//! elapsed-time text: `H:MM:SS`, prefixed with `N day(s), ` past 24 hours and
//! suffixed with `.ffffff` when there are sub-second microseconds.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};

/// Duration assumed when the provider omits `contentDetails.duration`.
pub const ZERO_DURATION: &str = "PT0S";

const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: u64 = 24 * MICROS_PER_HOUR;
const MICROS_PER_WEEK: u64 = 7 * MICROS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Designator {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Designator {
    fn from_char(c: char, in_time: bool) -> Option<Self> {
        match (c, in_time) {
            ('Y', false) => Some(Self::Year),
            ('M', false) => Some(Self::Month),
            ('W', false) => Some(Self::Week),
            ('D', false) => Some(Self::Day),
            ('H', true) => Some(Self::Hour),
            ('M', true) => Some(Self::Minute),
            ('S', true) => Some(Self::Second),
            _ => None,
        }
    }

    /// Microseconds per unit; `None` for calendar units with no fixed length.
    fn unit_micros(self) -> Option<u64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Week => Some(MICROS_PER_WEEK),
            Self::Day => Some(MICROS_PER_DAY),
            Self::Hour => Some(MICROS_PER_HOUR),
            Self::Minute => Some(MICROS_PER_MINUTE),
            Self::Second => Some(MICROS_PER_SECOND),
        }
    }
}

/// Parses an ISO 8601 duration such as `PT1H2M3S` or `P1DT30M`.
///
/// Fractional values are accepted on any component and rounded to the
/// nearest microsecond. Year and month components are only accepted when
/// zero, since they have no fixed length.
pub fn parse_iso8601_duration(input: &str) -> CoreResult<Duration> {
    let invalid = || CoreError::InvalidDuration(input.to_string());

    let body = input.trim().strip_prefix('P').ok_or_else(invalid)?;
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total_micros: u64 = 0;
    let mut in_time = false;
    let mut time_components = 0usize;
    let mut components = 0usize;
    let mut last: Option<Designator> = None;
    let mut number = String::new();

    for c in body.chars() {
        match c {
            'T' if !in_time && number.is_empty() => {
                in_time = true;
            }
            '0'..='9' => number.push(c),
            '.' | ',' if !number.is_empty() && !number.contains('.') => number.push('.'),
            _ => {
                let designator = Designator::from_char(c, in_time).ok_or_else(invalid)?;
                if number.is_empty() || number.ends_with('.') {
                    return Err(invalid());
                }
                // Components must appear in descending order, each at most once.
                if last.is_some_and(|prev| prev >= designator) {
                    return Err(invalid());
                }
                let micros = component_micros(&number, designator).ok_or_else(invalid)?;
                total_micros = total_micros.checked_add(micros).ok_or_else(invalid)?;

                last = Some(designator);
                components += 1;
                if in_time {
                    time_components += 1;
                }
                number.clear();
            }
        }
    }

    if !number.is_empty() || components == 0 || (in_time && time_components == 0) {
        return Err(invalid());
    }

    Ok(Duration::from_micros(total_micros))
}

fn component_micros(number: &str, designator: Designator) -> Option<u64> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    let whole: u64 = whole.parse().ok()?;
    let fraction: f64 = if fraction.is_empty() {
        0.0
    } else {
        format!("0.{fraction}").parse().ok()?
    };

    match designator.unit_micros() {
        Some(unit) => {
            let fractional_micros = (fraction * unit as f64).round() as u64;
            whole.checked_mul(unit)?.checked_add(fractional_micros)
        }
        None if whole == 0 && fraction == 0.0 => Some(0),
        None => None,
    }
}

/// Formats a duration as elapsed-time text, e.g. `1:02:03` or `2 days, 0:00:05`.
#[must_use]
pub fn format_elapsed(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let micros = duration.subsec_micros();

    let mut text = String::new();
    if days > 0 {
        let plural = if days == 1 { "" } else { "s" };
        text.push_str(&format!("{days} day{plural}, "));
    }
    text.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if micros > 0 {
        text.push_str(&format!(".{micros:06}"));
    }
    text
}

/// Renders the provider's optional duration field, defaulting to zero.
pub fn humanize_duration(iso_duration: Option<&str>) -> CoreResult<String> {
    let duration = parse_iso8601_duration(iso_duration.unwrap_or(ZERO_DURATION))?;
    Ok(format_elapsed(duration))
}
