mod id;
mod nic;
mod residence;
mod username;

pub use self::{id::*, nic::*, residence::*, username::*};
use crate::entity::contact::contains_ignore_case;
use crate::entity::{EmailAddress, FullName, Password, PhoneNumber};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct UserProfile {
    name: FullName,
    username: Username,
    email: EmailAddress,
    city: City,
    address: Address,
    phone_number: PhoneNumber,
    nic_number: NicNumber,
}

impl UserProfile {
    pub fn new(
        name: FullName,
        username: Username,
        email: EmailAddress,
        city: City,
        address: Address,
        phone_number: PhoneNumber,
        nic_number: NicNumber,
    ) -> Self {
        Self {
            name,
            username,
            email,
            city,
            address,
            phone_number,
            nic_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    /// Admin user search filters on the national identity card number only.
    pub fn nic_matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || contains_ignore_case(self.profile.nic_number.as_ref(), term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct UserRegistration {
    profile: UserProfile,
    password: Password,
}

impl UserRegistration {
    pub fn new(profile: UserProfile, password: Password) -> Self {
        Self { profile, password }
    }
}
