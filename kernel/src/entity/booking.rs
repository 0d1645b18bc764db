mod amount;
mod car;
mod customer;
mod id;
mod period;

pub use self::{amount::*, car::*, customer::*, id::*, period::*};
use crate::entity::contact::contains_ignore_case;
use crate::entity::{CarId, DateRange};
use destructure::Destructure;
use vodca::References;

/// A reservation as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    car: BookedCar,
    customer: Customer,
    period: ReservedPeriod,
    with_driver: bool,
    total: TotalAmount,
}

impl Booking {
    pub fn new(
        id: BookingId,
        car: BookedCar,
        customer: Customer,
        period: ReservedPeriod,
        with_driver: bool,
        total: TotalAmount,
    ) -> Self {
        Self {
            id,
            car,
            customer,
            period,
            with_driver,
            total,
        }
    }

    /// Admin booking search: car model or customer name contains `term`.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || self
                .car
                .model()
                .as_ref()
                .is_some_and(|model| contains_ignore_case(model.as_ref(), term))
            || contains_ignore_case(self.customer.name().as_ref(), term)
    }
}

/// A reservation about to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct NewBooking {
    car: CarId,
    customer: Customer,
    range: DateRange,
    with_driver: bool,
    total: TotalAmount,
}

impl NewBooking {
    pub fn new(
        car: CarId,
        customer: Customer,
        range: DateRange,
        with_driver: bool,
        total: TotalAmount,
    ) -> Self {
        Self {
            car,
            customer,
            range,
            with_driver,
            total,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entity::{CarModel, EmailAddress, FullName, PhoneNumber};

    fn booking(model: Option<&str>, name: &str) -> Booking {
        Booking::new(
            BookingId::new("b1"),
            BookedCar::new(None, model.map(CarModel::new), None),
            Customer::new(
                FullName::new(name),
                EmailAddress::new("a@b.lk"),
                PhoneNumber::new("0771234567"),
                None,
            ),
            ReservedPeriod::new(None, None),
            false,
            TotalAmount::new(0),
        )
    }

    #[test]
    fn search_matches_car_model_or_customer() {
        let target = booking(Some("Vitz"), "Nimal Perera");
        assert!(target.matches("vitz"));
        assert!(target.matches("PERERA"));
        assert!(target.matches(""));
        assert!(!target.matches("aqua"));
        assert!(booking(None, "Kamal").matches("kam"));
        assert!(!booking(None, "Kamal").matches("vitz"));
    }
}
