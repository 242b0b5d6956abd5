//! Deserialisation helpers for loosely typed backend fields.
//!
//! The backend serialises identifiers either as strings or as integers and
//! emits dates as RFC 3339 timestamps, zone-less ISO timestamps or bare
//! calendar dates. Display-only fields decode leniently so that one odd value
//! never discards the rest of a dataset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Zone-less timestamp layouts, interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Deserialises an identifier that may be a JSON string or integer.
pub(super) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Deserialises an optional timestamp.
///
/// Unparseable values are logged and treated as absent.
pub(super) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match parse_timestamp(&raw) {
        Ok(timestamp) => Ok(Some(timestamp)),
        Err(error) => {
            tracing::warn!(%error, "ignoring unparseable timestamp");
            Ok(None)
        }
    }
}

/// Deserialises an optional non-negative count.
///
/// Floats and numeric strings are rounded to the nearest integer. Negative,
/// out-of-range and non-numeric values are treated as absent.
pub(super) fn deserialize_lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let count = match Option::<RawCount>::deserialize(deserializer)? {
        None | Some(RawCount::Other(_)) => None,
        Some(RawCount::Integer(value)) => Some(value),
        Some(RawCount::Float(value)) => rounded_count(value),
        Some(RawCount::Text(text)) => text.trim().parse::<f64>().ok().and_then(rounded_count),
    };
    Ok(count.and_then(|value| T::try_from(value).ok()))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite, rounded and within 0..=u32::MAX before the cast"
)]
fn rounded_count(value: f64) -> Option<u64> {
    let rounded = value.round();
    if rounded.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&rounded) {
        Some(rounded as u64)
    } else {
        None
    }
}

/// Parses a backend timestamp.
///
/// Zone-less timestamps are interpreted as UTC and bare calendar dates as
/// midnight UTC.
///
/// # Errors
///
/// Returns a description of the input when no supported format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("unrecognised timestamp: {raw}"))
}
