//! ISO date-string coercion at the service boundary.
//!
//! Date fields travel as strings on the wire. Accepted forms are plain
//! calendar dates (`2022-09-16`) and full RFC 3339 timestamps
//! (`2022-09-16T00:00:00Z`), of which only the calendar date is kept.

use chrono::{DateTime, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Parse a wire date string into a [`NaiveDate`].
///
/// `field` is the wire-level field name, used verbatim in the validation
/// message.
pub fn parse_date(field: &str, value: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    Err(CoreError::Validation(format!(
        "{field} must be an ISO date (YYYY-MM-DD), got {value:?}"
    )))
}

/// Parse an optional wire date string. `None` stays `None`.
pub fn parse_opt_date(field: &str, value: Option<&str>) -> CoreResult<Option<NaiveDate>> {
    value.map(|v| parse_date(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_plain_date() {
        let date = parse_date("releaseDate", "2022-09-16").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 9, 16).unwrap());
    }

    #[test]
    fn test_rfc3339_keeps_date_part() {
        let date = parse_date("debutDate", "2016-08-08T09:30:00+09:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2016, 8, 8).unwrap());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let date = parse_date("birthDate", " 1997-03-27 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1997, 3, 27).unwrap());
    }

    #[test]
    fn test_garbage_is_validation_error() {
        let err = parse_date("releaseDate", "September 16th").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("releaseDate"), "message should name the field");
        });
    }

    #[test]
    fn test_optional_none_passes_through() {
        assert_eq!(parse_opt_date("debutDate", None).unwrap(), None);
    }

    #[test]
    fn test_optional_some_is_parsed() {
        let date = parse_opt_date("debutDate", Some("2013-06-13")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2013, 6, 13));
    }
}
