//! Flexible-input, fixed-output datetime normalization.
//!
//! Date fields in real-world COCO files come from heterogeneous tools, so
//! parsing accepts a broad range of formats. Output stays byte-stable for
//! compatibility with the original COCO convention: `date_created` emits
//! `YYYY/MM/DD` and `date_captured` emits `YYYY-MM-DD HH:MM:SS`.
//!
//! Parse failures are deliberately soft: the field resolves to absent and a
//! single [`DateParseWarning`] is produced, because COCO metadata dates are
//! informational rather than structurally required. A `null` or missing
//! field produces no warning at all.

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Canonical output format for `Info.date_created`.
pub const DATE_CREATED_FORMAT: &str = "%Y/%m/%d";

/// Canonical output format for `Image.date_captured`.
pub const DATE_CAPTURED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input formats, tried in order after RFC 3339. Formats carrying a
/// time component come first so that e.g. `2023-06-15 14:30:00` is not
/// truncated by a date-only pattern.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%B %d, %Y %I:%M %p",
    "%b %d, %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%Y-%m-%d",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d/%m/%Y",
];

/// A non-fatal diagnostic produced when a date-valued field could not be
/// normalized. The field resolves to absent; this never propagates as an
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateParseWarning {
    /// The raw offending value, rendered as text.
    pub raw: String,
    /// Whether the input was an unparseable string or not a string at all.
    pub kind: DateParseWarningKind,
}

/// Classification of a date-parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateParseWarningKind {
    /// The value was a string but matched none of the accepted formats.
    UnparseableString,
    /// The value was not a string (and not null).
    WrongType,
}

impl fmt::Display for DateParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DateParseWarningKind::UnparseableString => {
                write!(f, "Failed to parse datetime string: {}", self.raw)
            }
            DateParseWarningKind::WrongType => {
                write!(
                    f,
                    "Error parsing datetime string {}: expected a JSON string",
                    self.raw
                )
            }
        }
    }
}

/// Normalizes a raw JSON value into a datetime.
///
/// Returns the parsed value together with at most one warning:
///
/// - `None` or JSON `null` yields `(None, None)` — absent, no diagnostic.
/// - A recognizable string yields `(Some(..), None)`; date-only inputs
///   resolve to midnight, offset-carrying inputs keep their wall-clock time.
/// - An unrecognizable string or a non-string value yields
///   `(None, Some(warning))`.
pub fn parse_datetime(raw: Option<&Value>) -> (Option<NaiveDateTime>, Option<DateParseWarning>) {
    let value = match raw {
        None | Some(Value::Null) => return (None, None),
        Some(value) => value,
    };

    let text = match value.as_str() {
        Some(text) => text,
        None => {
            let warning = DateParseWarning {
                raw: value.to_string(),
                kind: DateParseWarningKind::WrongType,
            };
            return (None, Some(warning));
        }
    };

    match parse_datetime_str(text) {
        Some(parsed) => (Some(parsed), None),
        None => {
            let warning = DateParseWarning {
                raw: text.to_owned(),
                kind: DateParseWarningKind::UnparseableString,
            };
            (None, Some(warning))
        }
    }
}

/// Best-effort parse of a datetime string against the accepted formats.
pub fn parse_datetime_str(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // RFC 3339 covers `Z` and `+HH:MM` offsets; keep the wall-clock time of
    // the given instant rather than converting to UTC.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }

    parse_relative(trimmed)
}

/// Common relative terms as produced by human-edited metadata.
fn parse_relative(text: &str) -> Option<NaiveDateTime> {
    let now = Local::now().naive_local();
    match text.to_ascii_lowercase().as_str() {
        "now" => Some(now),
        "today" => Some(now.date().and_time(NaiveTime::MIN)),
        "yesterday" => Some((now.date() - Duration::days(1)).and_time(NaiveTime::MIN)),
        "tomorrow" => Some((now.date() + Duration::days(1)).and_time(NaiveTime::MIN)),
        _ => None,
    }
}

/// Serde glue for date fields: parses flexibly and downgrades failures to a
/// single logged warning, leaving the field absent.
pub(crate) fn deserialize_flexible<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let (parsed, warning) = parse_datetime(raw.as_ref());
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    Ok(parsed)
}

/// Serializes `date_created` in the canonical `YYYY/MM/DD` form.
pub(crate) fn serialize_date<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(datetime) => {
            serializer.serialize_str(&datetime.format(DATE_CREATED_FORMAT).to_string())
        }
        None => serializer.serialize_none(),
    }
}

/// Serializes `date_captured` in the canonical `YYYY-MM-DD HH:MM:SS` form.
pub(crate) fn serialize_datetime<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(datetime) => {
            serializer.serialize_str(&datetime.format(DATE_CAPTURED_FORMAT).to_string())
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_date_only_formats() {
        for input in [
            "2023/01/15",
            "2023-01-15",
            "2023.01.15",
            "January 15, 2023",
            "Jan 15, 2023",
            "15 Jan 2023",
            "15 January 2023",
            "15/01/2023",
        ] {
            assert_eq!(
                parse_datetime_str(input),
                Some(date(2023, 1, 15)),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        for input in [
            "2023-06-15 14:30:00",
            "2023-06-15T14:30:00",
            "15/06/2023 14:30",
            "June 15, 2023 2:30 PM",
        ] {
            assert_eq!(parse_datetime_str(input), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_rfc3339_offsets_keep_wall_clock_time() {
        for input in ["2023-06-15T14:30:00Z", "2023-06-15T14:30:00+00:00"] {
            let parsed = parse_datetime_str(input).unwrap();
            assert_eq!(
                parsed.date(),
                NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
            );
            assert_eq!(parsed.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        }
    }

    #[test]
    fn test_relative_terms() {
        let today = Local::now().date_naive();
        assert_eq!(parse_datetime_str("today").unwrap().date(), today);
        assert_eq!(parse_datetime_str("TODAY").unwrap().date(), today);
        assert_eq!(
            parse_datetime_str("yesterday").unwrap().date(),
            today - Duration::days(1)
        );
        assert!(parse_datetime_str("now").is_some());
    }

    #[test]
    fn test_unparseable_string_yields_one_warning() {
        let raw = json!("not a valid date");
        let (parsed, warning) = parse_datetime(Some(&raw));
        assert_eq!(parsed, None);

        let warning = warning.unwrap();
        assert_eq!(warning.kind, DateParseWarningKind::UnparseableString);
        assert_eq!(
            warning.to_string(),
            "Failed to parse datetime string: not a valid date"
        );
    }

    #[test]
    fn test_wrong_type_yields_one_warning() {
        let raw = json!(12345);
        let (parsed, warning) = parse_datetime(Some(&raw));
        assert_eq!(parsed, None);

        let warning = warning.unwrap();
        assert_eq!(warning.kind, DateParseWarningKind::WrongType);
        assert_eq!(
            warning.to_string(),
            "Error parsing datetime string 12345: expected a JSON string"
        );

        let raw = json!(true);
        let (_, warning) = parse_datetime(Some(&raw));
        assert!(warning.unwrap().to_string().contains("true"));
    }

    #[test]
    fn test_null_and_absent_produce_no_warning() {
        assert_eq!(parse_datetime(None), (None, None));
        assert_eq!(parse_datetime(Some(&Value::Null)), (None, None));
    }

    #[test]
    fn test_canonical_output_formats() {
        let created = date(2023, 1, 15);
        assert_eq!(
            created.format(DATE_CREATED_FORMAT).to_string(),
            "2023/01/15"
        );

        let captured = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            captured.format(DATE_CAPTURED_FORMAT).to_string(),
            "2023-06-15 14:30:00"
        );
    }
}
