use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{ClockifyError, Result};

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// An ISO-8601 duration such as `PT1H30M` or `P1DT2H`.
///
/// The input text is kept so values go back on the wire unchanged.
/// Construction validates eagerly; deserializing a malformed value fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoDuration {
    raw: String,
    delta: TimeDelta,
}

impl IsoDuration {
    pub fn parse(value: &str) -> Result<Self> {
        let delta = parse_iso_duration(value).ok_or_else(|| {
            ClockifyError::invalid_field("duration", format!("'{value}' is not an ISO-8601 duration"))
        })?;
        Ok(Self {
            raw: value.to_string(),
            delta,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Years count as 365 days and months as 30 days.
    pub fn to_time_delta(&self) -> TimeDelta {
        self.delta
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for IsoDuration {
    type Err = ClockifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IsoDuration {
    type Error = ClockifyError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for IsoDuration {
    type Error = ClockifyError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<IsoDuration> for String {
    fn from(value: IsoDuration) -> Self {
        value.raw
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`, at least one component, units in
/// order, fractions (`.` or `,`) allowed on any number.
fn parse_iso_duration(text: &str) -> Option<TimeDelta> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let rest = rest.strip_prefix('P')?;

    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut seen = false;
    let date_units = [
        ('Y', 365.0 * DAY_MS),
        ('M', 30.0 * DAY_MS),
        ('W', 7.0 * DAY_MS),
        ('D', DAY_MS),
    ];
    let mut millis = components(date, &date_units, &mut seen)?;

    if let Some(time) = time {
        if time.is_empty() {
            return None;
        }
        let time_units = [('H', HOUR_MS), ('M', MINUTE_MS), ('S', SECOND_MS)];
        millis += components(time, &time_units, &mut seen)?;
    }

    if !seen || !millis.is_finite() {
        return None;
    }
    let millis = millis.round();
    if millis > i64::MAX as f64 {
        return None;
    }
    let millis = millis as i64;
    TimeDelta::try_milliseconds(if negative { -millis } else { millis })
}

fn components(mut part: &str, units: &[(char, f64)], seen: &mut bool) -> Option<f64> {
    let mut total = 0.0;
    let mut next = 0;

    while !part.is_empty() {
        let end = part.find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))?;
        let (number, tail) = part.split_at(end);
        if number.is_empty() {
            return None;
        }
        let unit = tail.chars().next()?;
        let index = next + units[next..].iter().position(|(u, _)| *u == unit)?;
        let value: f64 = number.replace(',', ".").parse().ok()?;

        total += value * units[index].1;
        next = index + 1;
        part = &tail[unit.len_utf8()..];
        *seen = true;
    }

    Some(total)
}
