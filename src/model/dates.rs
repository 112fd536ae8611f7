//! Date parsing and the Brazilian display formats used across the report.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Parses RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS` and plain `YYYY-MM-DD` dates.
///
/// Offsets are dropped after converting to the timestamp's own local time.
pub fn parse_flexible(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy`
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy HH:MM`
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Shows the time only when the value carries one.
pub fn format_auto(dt: &NaiveDateTime) -> String {
    if dt.time() == chrono::NaiveTime::MIN {
        format_date(dt)
    } else {
        format_datetime(dt)
    }
}

/// Serde helper for required timestamps.
pub fn deserialize_required<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw)))
}

/// Serde helper for optional record dates.
///
/// Strings go through [`parse_flexible`], numbers are epoch milliseconds (UTC).
/// Anything else becomes `None`; records are never rejected over a date.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => {
            let parsed = parse_flexible(&s);
            if parsed.is_none() && !s.trim().is_empty() {
                log::debug!("Ignoring unparseable date '{}'", s);
            }
            parsed
        }
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        Some(other) => {
            log::debug!("Ignoring non-date value {}", other);
            None
        }
        None => None,
    };
    Ok(parsed)
}
