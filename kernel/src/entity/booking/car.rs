use destructure::Destructure;
use vodca::References;

use crate::entity::{CarId, CarModel, RegistrationNumber};

/// The car side of a booking record. Listings embed a summary of the car,
/// other queries only carry its id, so every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, References, Destructure)]
pub struct BookedCar {
    id: Option<CarId>,
    model: Option<CarModel>,
    registration: Option<RegistrationNumber>,
}

impl BookedCar {
    pub fn new(
        id: Option<CarId>,
        model: Option<CarModel>,
        registration: Option<RegistrationNumber>,
    ) -> Self {
        Self {
            id,
            model,
            registration,
        }
    }
}
