use crate::entity::CalendarDate;

/// Source of "today" for date policies, so they stay deterministic under test.
pub trait Clock: 'static + Sync + Send {
    fn today(&self) -> CalendarDate;
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
