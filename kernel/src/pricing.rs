use error_stack::Report;

use crate::entity::{DateRange, RentPerDay, TotalAmount};
use crate::KernelError;

/// Flat surcharge per rental day when a driver is requested.
pub const DRIVER_FEE_PER_DAY: i64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalQuote {
    days: i64,
    rent_per_day: RentPerDay,
    driver_fee: i64,
    total: TotalAmount,
}

impl RentalQuote {
    /// Rental days are counted as nights between pick-up and return.
    pub fn new(
        rent_per_day: RentPerDay,
        range: &DateRange,
        with_driver: bool,
    ) -> error_stack::Result<Self, KernelError> {
        let days = range.nights().max(0);
        let driver_fee = if with_driver {
            DRIVER_FEE_PER_DAY.checked_mul(days)
        } else {
            Some(0)
        };
        let total = driver_fee
            .zip(days.checked_mul(*rent_per_day.as_ref()))
            .and_then(|(fee, rent)| rent.checked_add(fee))
            .ok_or_else(|| {
                Report::new(KernelError::Invalid).attach_printable(format!(
                    "{days} days at {} per day is beyond any chargeable amount",
                    rent_per_day.as_ref()
                ))
            })?;
        Ok(Self {
            days,
            rent_per_day,
            driver_fee: driver_fee.unwrap_or_default(),
            total: TotalAmount::new(total),
        })
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn rent_per_day(&self) -> RentPerDay {
        self.rent_per_day
    }

    pub fn driver_fee(&self) -> i64 {
        self.driver_fee
    }

    pub fn total(&self) -> TotalAmount {
        self.total
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::*;
    use crate::entity::CalendarDate;

    fn range(nights: i64) -> DateRange {
        let start = CalendarDate::new(date!(2024 - 06 - 10));
        let end = CalendarDate::new(date!(2024 - 06 - 10) + time::Duration::days(nights));
        DateRange::new(start, end).unwrap()
    }

    #[test]
    fn self_drive() {
        let quote = RentalQuote::new(RentPerDay::new(6000), &range(3), false).unwrap();
        assert_eq!(quote.days(), 3);
        assert_eq!(quote.driver_fee(), 0);
        assert_eq!(quote.total(), TotalAmount::new(18_000));
        assert_eq!(quote.total().in_minor_units().unwrap(), 1_800_000);
    }

    #[test]
    fn with_driver_adds_daily_fee() {
        let quote = RentalQuote::new(RentPerDay::new(6000), &range(2), true).unwrap();
        assert_eq!(quote.driver_fee(), 5000);
        assert_eq!(quote.total(), TotalAmount::new(17_000));
    }

    #[test]
    fn same_day_costs_nothing() {
        let quote = RentalQuote::new(RentPerDay::new(6000), &range(0), true).unwrap();
        assert_eq!(quote.total(), TotalAmount::new(0));
    }

    #[test]
    fn oversized_totals_are_refused() {
        let far = DateRange::new(
            CalendarDate::new(date!(2025 - 01 - 01)),
            CalendarDate::new(date!(9999 - 12 - 31)),
        )
        .unwrap();
        let err = RentalQuote::new(RentPerDay::new(10_000_000_000_000), &far, true).unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));

        let err = RentalQuote::new(RentPerDay::new(i64::MAX), &range(1), true).unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));

        let quote = RentalQuote::new(RentPerDay::new(6000), &far, false).unwrap();
        assert_eq!(quote.total(), TotalAmount::new(quote.days() * 6000));
    }
}
