use destructure::Destructure;
use vodca::References;

use crate::entity::{EmailAddress, FullName, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Customer {
    name: FullName,
    email: EmailAddress,
    phone: PhoneNumber,
    alt_phone: Option<PhoneNumber>,
}

impl Customer {
    pub fn new(
        name: FullName,
        email: EmailAddress,
        phone: PhoneNumber,
        alt_phone: Option<PhoneNumber>,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            alt_phone,
        }
    }
}
