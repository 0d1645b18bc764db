use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::auth::Authenticator;
use kernel::prelude::entity::{
    AccessToken, AdminRegistration, Credentials, CustomerSession, EmailAddress, FullName,
    UserId, UserRegistration,
};
use kernel::KernelError;

use crate::backend::admin::AdminBody;
use crate::backend::user::ProfileBody;
use crate::backend::BackendClient;

pub struct BackendAuthenticator {
    client: BackendClient,
}

impl BackendAuthenticator {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Authenticator for BackendAuthenticator {
    async fn register_user(
        &self,
        registration: &UserRegistration,
    ) -> error_stack::Result<(), KernelError> {
        let body = UserRegisterBody {
            profile: ProfileBody::from(registration.profile()),
            password: registration.password().as_ref().as_str(),
        };
        self.client
            .send(Method::POST, &["auth", "register"], None, &body)
            .await
    }

    async fn login_user(
        &self,
        credentials: &Credentials,
    ) -> error_stack::Result<CustomerSession, KernelError> {
        let reply: CustomerLoginReply = self
            .client
            .exchange(&["auth", "login"], &LoginBody::from(credentials))
            .await?;
        Ok(reply.into())
    }

    async fn register_admin(
        &self,
        registration: &AdminRegistration,
    ) -> error_stack::Result<(), KernelError> {
        let body = AdminRegisterBody {
            profile: AdminBody::from(registration.profile()),
            password: registration.password().as_ref().as_str(),
            admin_code: registration.admin_code().as_ref().as_str(),
        };
        self.client
            .send(Method::POST, &["admin", "register"], None, &body)
            .await
    }

    async fn login_admin(
        &self,
        credentials: &Credentials,
    ) -> error_stack::Result<AccessToken, KernelError> {
        let reply: AdminLoginReply = self
            .client
            .exchange(&["admin", "login"], &LoginBody::from(credentials))
            .await?;
        Ok(AccessToken::new(reply.token))
    }
}

#[derive(Serialize)]
struct UserRegisterBody<'a> {
    #[serde(flatten)]
    profile: ProfileBody,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminRegisterBody<'a> {
    #[serde(flatten)]
    profile: AdminBody,
    password: &'a str,
    admin_code: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginBody<'a> {
    fn from(value: &'a Credentials) -> Self {
        Self {
            email: value.email().as_ref().as_str(),
            password: value.password().as_ref().as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(alias = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct CustomerLoginReply {
    token: String,
    user: SessionUser,
}

impl From<CustomerLoginReply> for CustomerSession {
    fn from(value: CustomerLoginReply) -> Self {
        CustomerSession::new(
            AccessToken::new(value.token),
            UserId::new(value.user.id),
            FullName::new(value.user.name),
            EmailAddress::new(value.user.email),
        )
    }
}

#[derive(Debug, Deserialize)]
struct AdminLoginReply {
    token: String,
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{
        Address, AdminCode, AdminProfile, AdminRegistration, City, CustomerSession,
        EmailAddress, FullName, NicNumber, Password, PhoneNumber, StaffId, UserId,
        UserProfile, UserRegistration, Username,
    };

    use super::{AdminRegisterBody, CustomerLoginReply, UserRegisterBody};
    use crate::backend::admin::AdminBody;
    use crate::backend::user::ProfileBody;

    #[test]
    fn login_reply_carries_user() {
        let raw = r#"{"token":"jwt.value","user":{"id":"u1","name":"Kasun","email":"k@x.lk"}}"#;
        let session = CustomerSession::from(serde_json::from_str::<CustomerLoginReply>(raw).unwrap());
        assert_eq!(session.token().as_ref(), "jwt.value");
        assert_eq!(session.user_id(), &UserId::new("u1"));
        assert_eq!(session.email(), &EmailAddress::new("k@x.lk"));
    }

    #[test]
    fn registration_bodies_are_flat() {
        let registration = UserRegistration::new(
            UserProfile::new(
                FullName::new("Kasun"),
                Username::new("kasun"),
                EmailAddress::new("k@x.lk"),
                City::new("Galle"),
                Address::new("3 Fort Rd"),
                PhoneNumber::new("0712345678"),
                NicNumber::new("851234567V"),
            ),
            Password::new("hunter22"),
        );
        let body = serde_json::to_value(UserRegisterBody {
            profile: ProfileBody::from(registration.profile()),
            password: registration.password().as_ref().as_str(),
        })
        .unwrap();
        assert_eq!(body["password"], "hunter22");
        assert_eq!(body["NICNumber"], "851234567V");

        let admin = AdminRegistration::new(
            AdminProfile::new(
                FullName::new("Admin"),
                StaffId::new("ST-01"),
                EmailAddress::new("admin@x.lk"),
            ),
            Password::new("pw"),
            AdminCode::new("letmein"),
        );
        let body = serde_json::to_value(AdminRegisterBody {
            profile: AdminBody::from(admin.profile()),
            password: admin.password().as_ref().as_str(),
            admin_code: admin.admin_code().as_ref().as_str(),
        })
        .unwrap();
        assert_eq!(body["userId"], "ST-01");
        assert_eq!(body["adminCode"], "letmein");
    }
}
