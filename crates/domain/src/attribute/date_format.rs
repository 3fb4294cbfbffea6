use std::fmt;

use chrono::{
    NaiveDate, NaiveDateTime, NaiveTime, Timelike,
    format::{Item, ParseError, StrftimeItems},
};
use range_filter_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Host date-format token to chrono strftime specifier.
const PHP_TOKENS: &[(char, &str)] = &[
    ('d', "%d"),
    ('j', "%d"),
    ('D', "%a"),
    ('l', "%A"),
    ('N', "%u"),
    ('w', "%w"),
    ('m', "%m"),
    ('n', "%m"),
    ('M', "%b"),
    ('F', "%B"),
    ('Y', "%Y"),
    ('y', "%y"),
    ('a', "%P"),
    ('A', "%p"),
    ('g', "%I"),
    ('h', "%I"),
    ('G', "%H"),
    ('H', "%H"),
    ('i', "%M"),
    ('s', "%S"),
    ('U', "%s"),
    ('O', "%z"),
    ('P', "%:z"),
];

/// Format used to read temporal bounds, stored as a chrono strftime pattern.
///
/// Deserializes from either a strftime pattern (anything containing `%`) or the
/// host's letter-token notation such as `d.m.Y`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Builds a format from a chrono strftime pattern.
    pub fn new(pattern: impl Into<String>) -> DomainResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DomainError::InvalidDateFormat {
                details: "not a valid strftime pattern".to_string(),
                pattern,
            });
        }
        Ok(Self { pattern })
    }

    /// Translates the host's letter-token notation (`Y-m-d H:i`) into strftime.
    pub fn from_php(format: &str) -> DomainResult<Self> {
        let mut pattern = String::with_capacity(format.len() * 2);
        let mut chars = format.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('%') => pattern.push_str("%%"),
                    Some(escaped) => pattern.push(escaped),
                    None => {}
                },
                '%' => pattern.push_str("%%"),
                c if c.is_ascii_alphabetic() => {
                    let Some((_, spec)) = PHP_TOKENS.iter().find(|(token, _)| *token == c) else {
                        return Err(DomainError::InvalidDateFormat {
                            pattern: format.to_string(),
                            details: format!("unsupported token '{c}'"),
                        });
                    };
                    pattern.push_str(spec);
                }
                other => pattern.push(other),
            }
        }
        Self::new(pattern)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Reads `raw` as UTC epoch seconds.
    ///
    /// Tries a full date-time first, then a bare date (midnight), then a bare
    /// time (seconds after midnight on the epoch day).
    pub fn parse_timestamp(&self, raw: &str) -> Result<i64, ParseError> {
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, &self.pattern)
            .map(|dt| dt.and_utc().timestamp())
            .or_else(|_| {
                NaiveDate::parse_from_str(raw, &self.pattern)
                    .map(|date| date.and_time(NaiveTime::default()).and_utc().timestamp())
            })
            .or_else(|_| {
                NaiveTime::parse_from_str(raw, &self.pattern).map(|time| i64::from(time.num_seconds_from_midnight()))
            })
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self { pattern: "%Y-%m-%d".to_string() }
    }
}

impl TryFrom<String> for DateFormat {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.contains('%') { Self::new(value) } else { Self::from_php(&value) }
    }
}

impl From<DateFormat> for String {
    fn from(value: DateFormat) -> Self {
        value.pattern
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
