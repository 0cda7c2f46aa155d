//! Submission date range bounds.
//!
//! The API filters on `submittedDate:[START TO END]` where both bounds are
//! GMT timestamps in `YYYYMMDDHHMM` form. Truncated stamps (`2023`,
//! `202301`, ...) and stamps with seconds are accepted by the service too;
//! seconds have no effect on matching.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::error::{QueryError, QueryResult};

/// Stamp used for an open range start.
pub const OPEN_START: &str = "100001010000";

/// Stamp used for an open range end.
pub const OPEN_END: &str = "900001010000";

/// One bound of a submission date range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateBound {
    /// No bound.
    #[default]
    Open,
    /// A calendar day, at midnight.
    Date(NaiveDate),
    /// A UTC timestamp, rendered with minute precision.
    DateTime(NaiveDateTime),
    /// A digit-only stamp of 4 to 14 digits, passed through after validation.
    Stamp(String),
}

impl DateBound {
    /// Renders the bound, using `open` when the bound is [`DateBound::Open`].
    pub(crate) fn render(&self, open: &'static str) -> QueryResult<String> {
        match self {
            DateBound::Open => Ok(open.to_string()),
            DateBound::Date(d) => Ok(format!("{}0000", d.format("%Y%m%d"))),
            DateBound::DateTime(dt) => Ok(dt.format("%Y%m%d%H%M").to_string()),
            DateBound::Stamp(s) => {
                validate_stamp(s)?;
                Ok(s.clone())
            }
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::Date(date)
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(datetime: NaiveDateTime) -> Self {
        DateBound::DateTime(datetime)
    }
}

/// Zoned timestamps are converted to UTC.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    fn from(datetime: DateTime<Tz>) -> Self {
        DateBound::DateTime(datetime.naive_utc())
    }
}

impl From<&str> for DateBound {
    fn from(stamp: &str) -> Self {
        DateBound::Stamp(stamp.to_string())
    }
}

impl From<String> for DateBound {
    fn from(stamp: String) -> Self {
        DateBound::Stamp(stamp)
    }
}

impl<T: Into<DateBound>> From<Option<T>> for DateBound {
    fn from(bound: Option<T>) -> Self {
        bound.map_or(DateBound::Open, Into::into)
    }
}

// =============================================================================
// Stamp validation
// =============================================================================

/// Components following the four-digit year, in stamp order.
#[derive(Debug, Clone, Copy)]
enum Component {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

const COMPONENTS: [Component; 5] = [
    Component::Month,
    Component::Day,
    Component::Hour,
    Component::Minute,
    Component::Second,
];

impl Component {
    /// Whether a one- or two-digit value is accepted for this component.
    fn accepts(self, width: usize, value: u32) -> bool {
        let (min, max) = match (self, width) {
            (Component::Month, 2) => (1, 12),
            (Component::Day, 2) => (1, 31),
            (Component::Hour, 2) => (0, 23),
            (Component::Minute, 2) => (0, 59),
            (Component::Second, 2) => (0, 61),
            (Component::Month | Component::Day, _) => (1, 9),
            _ => (0, 9),
        };
        (min..=max).contains(&value)
    }
}

/// Validates a digit-only stamp without changing it.
///
/// The number of components is implied by the length (`2023` is a year,
/// `202301` a month, up to `20230101123059` with seconds). After the year,
/// each component takes two digits when they form an acceptable value and
/// one digit otherwise; any digits left over, or a combination that is not
/// a real calendar date and time, reject the stamp.
pub fn validate_stamp(stamp: &str) -> QueryResult<()> {
    let invalid = |reason: &str| {
        debug!(stamp, reason, "rejected submittedDate stamp");
        QueryError::InvalidDateString {
            value: stamp.to_string(),
            reason: reason.to_string(),
        }
    };

    if !(4..=14).contains(&stamp.len()) || !stamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a digit-only timestamp with 4 to 14 digits"));
    }

    let count = match stamp.len() {
        4 => 0,
        5..=6 => 1,
        7..=8 => 2,
        9..=10 => 3,
        11..=12 => 4,
        _ => 5,
    };

    let (year_digits, rest) = stamp.split_at(4);
    let year: i32 = year_digits
        .parse()
        .map_err(|_| invalid("year is not a number"))?;

    let (values, consumed) = match_components(rest, &COMPONENTS[..count])
        .ok_or_else(|| invalid("not a valid datetime"))?;
    if consumed != rest.len() {
        return Err(invalid("unconverted digits remain"));
    }

    let value = |i: usize, default: u32| values.get(i).copied().unwrap_or(default);
    let date = NaiveDate::from_ymd_opt(year, value(0, 1), value(1, 1));
    let time = NaiveTime::from_hms_opt(value(2, 0), value(3, 0), value(4, 0));
    match (date, time) {
        (Some(_), Some(_)) if year >= 1 => Ok(()),
        _ => Err(invalid("not a valid datetime")),
    }
}

/// Matches components left to right, preferring two digits, and returns the
/// decoded values with the number of digits consumed.
fn match_components(input: &str, components: &[Component]) -> Option<(Vec<u32>, usize)> {
    let Some((&component, remaining)) = components.split_first() else {
        return Some((Vec::new(), 0));
    };

    for width in [2, 1] {
        let Some(digits) = input.get(..width) else {
            continue;
        };
        let Ok(value) = digits.parse::<u32>() else {
            continue;
        };
        if !component.accepts(width, value) {
            continue;
        }
        if let Some((mut values, used)) = match_components(&input[width..], remaining) {
            values.insert(0, value);
            return Some((values, used + width));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    mod rendering {
        use super::*;

        #[test]
        fn test_date_renders_midnight() {
            let bound = DateBound::from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
            assert_eq!(bound.render(OPEN_START).unwrap(), "202301010000");
        }

        #[test]
        fn test_datetime_renders_minutes() {
            let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 30, 45)
                .unwrap();
            assert_eq!(DateBound::from(dt).render(OPEN_END).unwrap(), "202401011230");
        }

        #[test]
        fn test_zoned_datetime_is_converted_to_utc() {
            let tz = FixedOffset::east_opt(9 * 3600).unwrap();
            let local = tz.with_ymd_and_hms(2023, 1, 1, 5, 0, 0).unwrap();
            assert_eq!(DateBound::from(local).render(OPEN_START).unwrap(), "202212312000");
        }

        #[test]
        fn test_utc_datetime() {
            let utc = Utc.with_ymd_and_hms(2023, 6, 15, 8, 5, 0).unwrap();
            assert_eq!(DateBound::from(utc).render(OPEN_START).unwrap(), "202306150805");
        }

        #[test]
        fn test_open_bounds() {
            assert_eq!(DateBound::Open.render(OPEN_START).unwrap(), OPEN_START);
            assert_eq!(DateBound::from(None::<NaiveDate>).render(OPEN_END).unwrap(), OPEN_END);
        }

        #[test]
        fn test_stamp_passes_through_unchanged() {
            let bound = DateBound::from("20230101123059");
            assert_eq!(bound.render(OPEN_START).unwrap(), "20230101123059");
        }
    }

    mod stamps {
        use super::*;

        #[test]
        fn test_valid_stamps() {
            for stamp in [
                "2023",
                "202301",
                "20231",
                "20230131",
                "2023013",
                "2023010112",
                "202301011230",
                "20230101123059",
                "2023010112305",
            ] {
                assert!(validate_stamp(stamp).is_ok(), "{} should be valid", stamp);
            }
        }

        #[test]
        fn test_one_digit_month_with_two_digit_day() {
            // Month 13 is out of range, so the month is `1` and the day `30`.
            assert!(validate_stamp("2023130").is_ok());
        }

        #[test]
        fn test_invalid_shape() {
            for stamp in ["", "123", "202", "2023-01", "abcd", "202301011230591"] {
                assert!(
                    matches!(
                        validate_stamp(stamp),
                        Err(QueryError::InvalidDateString { .. })
                    ),
                    "{:?} should be rejected",
                    stamp
                );
            }
        }

        #[test]
        fn test_invalid_calendar_values() {
            for stamp in ["0000", "202300", "202313", "20230230", "2023010124", "202301012360"] {
                assert!(validate_stamp(stamp).is_err(), "{} should be rejected", stamp);
            }
        }

        #[test]
        fn test_leap_day() {
            assert!(validate_stamp("20240229").is_ok());
            assert!(validate_stamp("20230229").is_err());
        }

        #[test]
        fn test_leap_second_is_rejected() {
            assert!(validate_stamp("20230101235960").is_err());
        }
    }
}
