use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// National identity card number, either 12 digits or 9 digits and a `V`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct NicNumber(String);

impl NicNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
