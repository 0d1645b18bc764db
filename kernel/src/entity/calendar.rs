use std::fmt::{Display, Formatter};

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time, UtcOffset};
use vodca::{AsRefln, Fromln, References};

use crate::KernelError;

/// A day on the calendar, without time of day or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Accepts `YYYY-MM-DD` or an RFC 3339 date-time. Date-times are normalized
    /// to the calendar day they fall on in UTC.
    pub fn parse(value: &str) -> error_stack::Result<Self, KernelError> {
        let value = value.trim();
        if let Ok(date) = Date::parse(value, format_description!("[year]-[month]-[day]")) {
            return Ok(Self(date));
        }
        if let Ok(time) = OffsetDateTime::parse(value, &Rfc3339) {
            return Ok(Self(time.to_offset(UtcOffset::UTC).date()));
        }
        // zone-less date-time, e.g. `2024-06-10T09:30:00`
        match value.split_once('T') {
            Some((day, clock)) if is_clock(clock) => {
                Date::parse(day, format_description!("[year]-[month]-[day]"))
                    .map(Self)
                    .change_context(KernelError::Invalid)
                    .attach_printable_lazy(|| format!("`{value}` is not a calendar date"))
            }
            _ => Err(Report::new(KernelError::Invalid)
                .attach_printable(format!("`{value}` is not a calendar date"))),
        }
    }

    pub fn next_day(&self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(&self, other: &Self) -> i64 {
        (other.0 - self.0).whole_days()
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Inclusive span of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, References)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(day: CalendarDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Number of nights between start and end; zero for a single-day range.
    pub fn nights(&self) -> i64 {
        self.start.days_until(&self.end)
    }

    pub fn contains(&self, day: &CalendarDate) -> bool {
        self.start <= *day && *day <= self.end
    }
}

pub struct Days {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|day| *day <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}

fn is_clock(value: &str) -> bool {
    Time::parse(value, format_description!("[hour]:[minute]:[second]")).is_ok()
        || Time::parse(
            value,
            format_description!("[hour]:[minute]:[second].[subsecond]"),
        )
        .is_ok()
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::{CalendarDate, DateRange};

    #[test]
    fn parses_plain_days() {
        let day = CalendarDate::parse("2024-06-10").unwrap();
        assert_eq!(day, CalendarDate::new(date!(2024 - 06 - 10)));
        assert_eq!(day.to_string(), "2024-06-10");
    }

    #[test]
    fn normalizes_date_times_to_utc_day() {
        let utc = CalendarDate::parse("2024-06-10T00:00:00.000Z").unwrap();
        assert_eq!(utc, CalendarDate::new(date!(2024 - 06 - 10)));

        let ahead = CalendarDate::parse("2024-06-10T03:00:00+05:30").unwrap();
        assert_eq!(ahead, CalendarDate::new(date!(2024 - 06 - 09)));

        let naive = CalendarDate::parse("2024-06-10T09:30:00").unwrap();
        assert_eq!(naive, CalendarDate::new(date!(2024 - 06 - 10)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(CalendarDate::parse("").is_err());
        assert!(CalendarDate::parse("next tuesday").is_err());
        assert!(CalendarDate::parse("2024-02-30").is_err());
        assert!(CalendarDate::parse("2024-06-10Tgarbage").is_err());
        assert!(CalendarDate::parse("2024-06-10T").is_err());
        assert!(CalendarDate::parse("2024-06-10T25:00:00").is_err());
    }

    #[test]
    fn zone_less_times_may_carry_fractions() {
        let day = CalendarDate::new(date!(2024 - 06 - 10));
        assert!(CalendarDate::parse("2024-06-10T09:30:00").is_ok());
        assert_eq!(CalendarDate::parse("2024-06-10T09:30:00.250").unwrap(), day);
    }

    #[test]
    fn serde_uses_iso_days() {
        let day = CalendarDate::new(date!(2024 - 01 - 05));
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-01-05\"");
        let back: CalendarDate = serde_json::from_str("\"2024-01-05T12:00:00Z\"").unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn range_walks_inclusive_days_across_months() {
        let range = DateRange::new(
            CalendarDate::new(date!(2024 - 02 - 28)),
            CalendarDate::new(date!(2024 - 03 - 01)),
        )
        .unwrap();
        let days = range.days().map(|d| d.to_string()).collect::<Vec<_>>();
        assert_eq!(days, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(range.nights(), 2);
    }

    #[test]
    fn single_day_range_has_one_day() {
        let day = CalendarDate::new(date!(2024 - 06 - 10));
        let range = DateRange::single(day);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![day]);
        assert_eq!(range.nights(), 0);
        assert!(range.contains(&day));
    }

    #[test]
    fn inverted_range_is_refused() {
        let start = CalendarDate::new(date!(2024 - 06 - 12));
        let end = CalendarDate::new(date!(2024 - 06 - 10));
        assert!(DateRange::new(start, end).is_none());
    }
}
