use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Backend record id of a car.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarId(String);

impl CarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
