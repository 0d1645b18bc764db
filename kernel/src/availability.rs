use std::collections::BTreeSet;
use std::fmt::Display;

use error_stack::{Context, Report};
use serde::Serialize;

use crate::entity::{CalendarDate, DateRange, ReservedPeriod};

/// Days already taken by existing reservations of one car, in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockedDates(BTreeSet<CalendarDate>);

impl BlockedDates {
    pub fn contains(&self, day: &CalendarDate) -> bool {
        self.0.contains(day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.0.iter()
    }

    /// Every blocked day inside `range`.
    pub fn within(&self, range: &DateRange) -> Vec<CalendarDate> {
        self.0
            .range(*range.start()..=*range.end())
            .copied()
            .collect()
    }
}

impl IntoIterator for BlockedDates {
    type Item = CalendarDate;
    type IntoIter = std::collections::btree_set::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Dates a customer typed into the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateRange {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl CandidateRange {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    pub fn resolve(&self) -> error_stack::Result<DateRange, InvalidRangeError> {
        let start = self
            .start
            .ok_or_else(|| Report::new(InvalidRangeError::MissingStart))?;
        let end = self
            .end
            .ok_or_else(|| Report::new(InvalidRangeError::MissingEnd))?;
        DateRange::new(start, end)
            .ok_or_else(|| Report::new(InvalidRangeError::StartAfterEnd { start, end }))
    }
}

impl From<DateRange> for CandidateRange {
    fn from(range: DateRange) -> Self {
        Self::new(Some(*range.start()), Some(*range.end()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    MissingStart,
    MissingEnd,
    StartAfterEnd {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidRangeError::MissingStart => write!(f, "Start date is required"),
            InvalidRangeError::MissingEnd => write!(f, "End date is required"),
            InvalidRangeError::StartAfterEnd { start, end } => {
                write!(f, "Start date {start} is after end date {end}")
            }
        }
    }
}

impl Context for InvalidRangeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    Available,
    /// First day of the candidate, in calendar order, that is already taken.
    Conflict { conflicting_date: CalendarDate },
}

impl RangeCheck {
    pub fn is_available(&self) -> bool {
        matches!(self, RangeCheck::Available)
    }
}

/// Collects every day covered by `periods`, ends included.
///
/// Periods without both dates or with the start after the end are skipped
/// so that one corrupt record cannot make the whole car unbookable.
pub fn expand_blocked_dates<'a>(
    periods: impl IntoIterator<Item = &'a ReservedPeriod>,
) -> BlockedDates {
    let mut blocked = BTreeSet::new();
    for period in periods {
        match period.range() {
            Some(range) => blocked.extend(range.days()),
            None => tracing::warn!(?period, "skipping malformed reservation"),
        }
    }
    BlockedDates(blocked)
}

pub fn is_date_blocked(day: &CalendarDate, blocked: &BlockedDates) -> bool {
    blocked.contains(day)
}

/// Stops at the first blocked day; use [`BlockedDates::within`] for all of them.
pub fn validate_range(
    candidate: &CandidateRange,
    blocked: &BlockedDates,
) -> error_stack::Result<RangeCheck, InvalidRangeError> {
    let range = candidate.resolve()?;
    Ok(range
        .days()
        .find(|day| is_date_blocked(day, blocked))
        .map_or(RangeCheck::Available, |conflicting_date| {
            RangeCheck::Conflict { conflicting_date }
        }))
}
