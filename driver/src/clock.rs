use time::OffsetDateTime;

use kernel::interface::clock::Clock;
use kernel::prelude::entity::CalendarDate;

/// Today's date in UTC, the zone stored booking dates are normalized to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::new(OffsetDateTime::now_utc().date())
    }
}
