use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{
    AccessToken, Admin, CustomerSession, DestructAdmin, DestructAdminProfile,
    DestructCustomerSession, DestructUser, DestructUserProfile, User,
};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    id: String,
    name: String,
    username: String,
    email: String,
    city: String,
    address: String,
    phone_number: String,
    nic_number: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let DestructUser { id, profile } = value.into_destruct();
        let DestructUserProfile {
            name,
            username,
            email,
            city,
            address,
            phone_number,
            nic_number,
        } = profile.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            email: email.into(),
            city: city.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            nic_number: nic_number.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    id: String,
    name: String,
    staff_id: String,
    email: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUserResponse {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<SessionUserResponse>,
}

pub struct AccountPresenter;

impl Exhaust<CustomerSession> for AccountPresenter {
    type To = Json<LoginResponse>;
    fn emit(&self, input: CustomerSession) -> Self::To {
        let DestructCustomerSession {
            token,
            user_id,
            name,
            email,
        } = input.into_destruct();
        Json(LoginResponse {
            token: token.into(),
            user: Some(SessionUserResponse {
                id: user_id.into(),
                name: name.into(),
                email: email.into(),
            }),
        })
    }
}

impl Exhaust<AccessToken> for AccountPresenter {
    type To = Json<LoginResponse>;
    fn emit(&self, input: AccessToken) -> Self::To {
        Json(LoginResponse {
            token: input.into(),
            user: None,
        })
    }
}

impl Exhaust<User> for AccountPresenter {
    type To = Json<UserResponse>;
    fn emit(&self, input: User) -> Self::To {
        Json(input.into())
    }
}

impl Exhaust<Vec<User>> for AccountPresenter {
    type To = Json<Vec<UserResponse>>;
    fn emit(&self, input: Vec<User>) -> Self::To {
        Json(input.into_iter().map(UserResponse::from).collect())
    }
}

impl Exhaust<Admin> for AccountPresenter {
    type To = Json<AdminResponse>;
    fn emit(&self, input: Admin) -> Self::To {
        let DestructAdmin { id, profile } = input.into_destruct();
        let DestructAdminProfile {
            name,
            staff_id,
            email,
        } = profile.into_destruct();
        Json(AdminResponse {
            id: id.into(),
            name: name.into(),
            staff_id: staff_id.into(),
            email: email.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{AccessToken, CustomerSession, EmailAddress, FullName, UserId};

    use crate::controller::Exhaust;

    use super::AccountPresenter;

    #[test]
    fn admin_login_carries_only_the_token() {
        let body = AccountPresenter.emit(AccessToken::new("adm-1"));
        assert_eq!(
            serde_json::to_string(&body.0).unwrap(),
            r#"{"token":"adm-1"}"#
        );
    }

    #[test]
    fn customer_login_names_the_user() {
        let body = AccountPresenter.emit(CustomerSession::new(
            AccessToken::new("tok"),
            UserId::new("u1"),
            FullName::new("Nimal"),
            EmailAddress::new("n@mail.lk"),
        ));
        assert_eq!(
            serde_json::to_value(&body.0).unwrap(),
            serde_json::json!({
                "token": "tok",
                "user": {"id": "u1", "name": "Nimal", "email": "n@mail.lk"}
            })
        );
    }
}
