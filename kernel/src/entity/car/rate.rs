use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Daily rent in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentPerDay(i64);

impl RentPerDay {
    pub fn new(rent: i64) -> Self {
        Self(rent)
    }
}

/// Kilometres per litre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FuelEfficiency(f64);

impl FuelEfficiency {
    pub fn new(km_per_litre: f64) -> Self {
        Self(km_per_litre)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PassengerCount(u32);

impl PassengerCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }
}
