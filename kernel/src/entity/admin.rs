mod code;
mod id;

pub use self::{code::*, id::*};
use crate::entity::{EmailAddress, FullName, Password};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct AdminProfile {
    name: FullName,
    staff_id: StaffId,
    email: EmailAddress,
}

impl AdminProfile {
    pub fn new(name: FullName, staff_id: StaffId, email: EmailAddress) -> Self {
        Self {
            name,
            staff_id,
            email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Admin {
    id: AdminId,
    profile: AdminProfile,
}

impl Admin {
    pub fn new(id: AdminId, profile: AdminProfile) -> Self {
        Self { id, profile }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct AdminRegistration {
    profile: AdminProfile,
    password: Password,
    admin_code: AdminCode,
}

impl AdminRegistration {
    pub fn new(profile: AdminProfile, password: Password, admin_code: AdminCode) -> Self {
        Self {
            profile,
            password,
            admin_code,
        }
    }
}
