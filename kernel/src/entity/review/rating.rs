use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Star rating. The review form only produces 1 to 5, but stored reviews are
/// taken as the backend returns them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Self {
        Self(stars)
    }

    pub fn is_in_scale(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}
