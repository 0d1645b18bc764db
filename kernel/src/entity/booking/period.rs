use vodca::References;

use crate::entity::{CalendarDate, DateRange};

/// Dates of a stored reservation. Either side may be missing when the
/// upstream record is corrupt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, References)]
pub struct ReservedPeriod {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl ReservedPeriod {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// `None` unless both dates are present and in order.
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start?, self.end?)
    }
}

impl From<DateRange> for ReservedPeriod {
    fn from(range: DateRange) -> Self {
        Self::new(Some(*range.start()), Some(*range.end()))
    }
}
