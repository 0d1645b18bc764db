use kernel::prelude::entity::{
    AccessToken, AdminProfile, AdminRegistration, Credentials, UserProfile, UserRegistration,
};

pub struct RegisterUserDto {
    pub registration: UserRegistration,
}

pub struct RegisterAdminDto {
    pub registration: AdminRegistration,
}

pub struct LoginDto {
    pub credentials: Credentials,
}

pub struct SessionDto {
    pub token: AccessToken,
}

pub struct UpdateUserDto {
    pub token: AccessToken,
    pub profile: UserProfile,
}

pub struct UpdateAdminDto {
    pub token: AccessToken,
    pub profile: AdminProfile,
}

pub struct ListUsersDto {
    pub nic: Option<String>,
}
