use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Plate number. The screens address cars by this rather than by record id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
