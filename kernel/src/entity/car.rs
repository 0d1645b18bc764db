mod id;
mod model;
mod rate;
mod registration;

pub use self::{id::*, model::*, rate::*, registration::*};
use crate::entity::contact::contains_ignore_case;
use destructure::Destructure;
use vodca::References;

/// Everything an administrator enters for a vehicle.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct CarSpec {
    registration: RegistrationNumber,
    model: CarModel,
    make: Option<CarMake>,
    rent_per_day: RentPerDay,
    fuel_efficiency: FuelEfficiency,
    passenger_count: PassengerCount,
    image_url: ImageUrl,
}

impl CarSpec {
    pub fn new(
        registration: RegistrationNumber,
        model: CarModel,
        make: Option<CarMake>,
        rent_per_day: RentPerDay,
        fuel_efficiency: FuelEfficiency,
        passenger_count: PassengerCount,
        image_url: ImageUrl,
    ) -> Self {
        Self {
            registration,
            model,
            make,
            rent_per_day,
            fuel_efficiency,
            passenger_count,
            image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Car {
    id: CarId,
    spec: CarSpec,
}

impl Car {
    pub fn new(id: CarId, spec: CarSpec) -> Self {
        Self { id, spec }
    }

    /// Fleet search: model or make contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(self.spec.model.as_ref(), term)
            || self
                .spec
                .make
                .as_ref()
                .is_some_and(|make| contains_ignore_case(make.as_ref(), term))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn car(model: &str, make: Option<&str>) -> Car {
        Car::new(
            CarId::new("64a1"),
            CarSpec::new(
                RegistrationNumber::new("CAB-1234"),
                CarModel::new(model),
                make.map(CarMake::new),
                RentPerDay::new(5000),
                FuelEfficiency::new(14.5),
                PassengerCount::new(4),
                ImageUrl::new("https://img.example/prius.png"),
            ),
        )
    }

    #[test]
    fn search_matches_model_or_make() {
        let prius = car("Prius", Some("Toyota"));
        assert!(prius.matches("pri"));
        assert!(prius.matches("TOYO"));
        assert!(prius.matches("  "));
        assert!(!prius.matches("civic"));
        assert!(!car("Axio", None).matches("toyota"));
    }
}
