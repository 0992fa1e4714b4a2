//! Serde helpers for picnic times.
//!
//! Accepts RFC 3339 timestamps with `Z` or an explicit offset and converts them
//! to UTC. Timestamps without an offset are taken as already being UTC.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error};

pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }

    value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(D::Error::custom)
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| parse(&value).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_designator() {
        assert_eq!(
            parse("2026-07-01T12:30:00Z").unwrap().to_string(),
            "2026-07-01 12:30:00"
        );
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        assert_eq!(
            parse("2026-07-01T12:30:00+03:00").unwrap().to_string(),
            "2026-07-01 09:30:00"
        );
    }

    #[test]
    fn test_naive_forms() {
        assert_eq!(
            parse("2026-07-01T12:30:00").unwrap().to_string(),
            "2026-07-01 12:30:00"
        );
        assert_eq!(
            parse("2026-07-01 12:30:00.5").unwrap().to_string(),
            "2026-07-01 12:30:00.500"
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("tomorrow").is_err());
    }
}
