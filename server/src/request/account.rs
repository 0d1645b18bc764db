use garde::Validate;
use serde::Deserialize;

use application::transfer::{
    ListUsersDto, LoginDto, RegisterAdminDto, RegisterUserDto, SessionDto, UpdateAdminDto,
    UpdateUserDto,
};
use kernel::prelude::entity::{
    Address, AdminCode, AdminProfile, AdminRegistration, City, Credentials, EmailAddress,
    FullName, NicNumber, Password, PhoneNumber, StaffId, UserProfile, UserRegistration, Username,
};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use crate::request::Session;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    username: String,
    #[garde(pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    email: String,
    #[garde(length(min = 1))]
    city: String,
    #[garde(length(min = 1))]
    address: String,
    #[garde(pattern(r"^[0-9]{10}$"))]
    phone_number: String,
    #[garde(pattern(r"^(?:[0-9]{12}|[0-9]{9}[Vv])$"))]
    nic_number: String,
}

impl From<ProfileRequest> for UserProfile {
    fn from(value: ProfileRequest) -> Self {
        UserProfile::new(
            FullName::new(value.name.trim()),
            Username::new(value.username.trim()),
            EmailAddress::new(value.email.trim()),
            City::new(value.city.trim()),
            Address::new(value.address.trim()),
            PhoneNumber::new(value.phone_number),
            NicNumber::new(value.nic_number),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(flatten)]
    #[garde(dive)]
    profile: ProfileRequest,
    #[garde(length(min = 1))]
    password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[garde(pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    email: String,
    #[garde(length(min = 1))]
    password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileRequest {
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    staff_id: String,
    #[garde(pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    email: String,
}

impl From<AdminProfileRequest> for AdminProfile {
    fn from(value: AdminProfileRequest) -> Self {
        AdminProfile::new(
            FullName::new(value.name.trim()),
            StaffId::new(value.staff_id.trim()),
            EmailAddress::new(value.email.trim()),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAdminRequest {
    #[serde(flatten)]
    #[garde(dive)]
    profile: AdminProfileRequest,
    #[garde(length(min = 1))]
    password: String,
    #[garde(length(min = 1))]
    admin_code: String,
}

#[derive(Debug, Deserialize)]
pub struct ListUsersRequest {
    nic: Option<String>,
}

pub struct AccountTransformer;

impl TryIntake<RegisterUserRequest> for AccountTransformer {
    type To = RegisterUserDto;
    type Error = ErrorStatus;
    fn emit(&self, input: RegisterUserRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(RegisterUserDto {
            registration: UserRegistration::new(
                input.profile.into(),
                Password::new(input.password),
            ),
        })
    }
}

impl TryIntake<RegisterAdminRequest> for AccountTransformer {
    type To = RegisterAdminDto;
    type Error = ErrorStatus;
    fn emit(&self, input: RegisterAdminRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(RegisterAdminDto {
            registration: AdminRegistration::new(
                input.profile.into(),
                Password::new(input.password),
                AdminCode::new(input.admin_code),
            ),
        })
    }
}

impl TryIntake<LoginRequest> for AccountTransformer {
    type To = LoginDto;
    type Error = ErrorStatus;
    fn emit(&self, input: LoginRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(LoginDto {
            credentials: Credentials::new(
                EmailAddress::new(input.email.trim()),
                Password::new(input.password),
            ),
        })
    }
}

impl TryIntake<(Session, ProfileRequest)> for AccountTransformer {
    type To = UpdateUserDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (Session, ProfileRequest)) -> Result<Self::To, Self::Error> {
        let (session, input) = input;
        input.validate()?;
        Ok(UpdateUserDto {
            token: session.token(),
            profile: input.into(),
        })
    }
}

impl TryIntake<(Session, AdminProfileRequest)> for AccountTransformer {
    type To = UpdateAdminDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (Session, AdminProfileRequest)) -> Result<Self::To, Self::Error> {
        let (session, input) = input;
        input.validate()?;
        Ok(UpdateAdminDto {
            token: session.token(),
            profile: input.into(),
        })
    }
}

impl Intake<Session> for AccountTransformer {
    type To = SessionDto;
    fn emit(&self, input: Session) -> Self::To {
        SessionDto {
            token: input.token(),
        }
    }
}

impl Intake<ListUsersRequest> for AccountTransformer {
    type To = ListUsersDto;
    fn emit(&self, input: ListUsersRequest) -> Self::To {
        ListUsersDto { nic: input.nic }
    }
}

#[cfg(test)]
mod test {
    use crate::controller::TryIntake;

    use super::{AccountTransformer, LoginRequest, RegisterUserRequest};

    fn registration(phone: &str, nic: &str) -> RegisterUserRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Nimal Perera",
            "username": "nimal",
            "email": "nimal@mail.lk",
            "city": "Kandy",
            "address": "12 Lake Rd",
            "phoneNumber": phone,
            "nicNumber": nic,
            "password": "secret"
        }))
        .unwrap()
    }

    #[test]
    fn accepts_both_nic_formats() {
        assert!(AccountTransformer
            .emit(registration("0771234567", "200012345678"))
            .is_ok());
        assert!(AccountTransformer
            .emit(registration("0771234567", "901234567v"))
            .is_ok());
    }

    #[test]
    fn rejects_bad_phone_or_nic() {
        assert!(AccountTransformer
            .emit(registration("077123456", "901234567V"))
            .is_err());
        assert!(AccountTransformer
            .emit(registration("0771234567", "90123456X"))
            .is_err());
    }

    #[test]
    fn login_needs_an_email_shape() {
        let bad: LoginRequest =
            serde_json::from_str(r#"{"email":"nimal.mail.lk","password":"x"}"#).unwrap();
        assert!(AccountTransformer.emit(bad).is_err());
        let good: LoginRequest =
            serde_json::from_str(r#"{"email":"nimal@mail.lk","password":"x"}"#).unwrap();
        assert!(AccountTransformer.emit(good).is_ok());
    }
}
