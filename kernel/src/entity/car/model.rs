use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarModel(String);

impl CarModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarMake(String);

impl CarMake {
    pub fn new(make: impl Into<String>) -> Self {
        Self(make.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
