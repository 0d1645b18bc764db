use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{
    AccessToken, Address, City, DestructUserProfile, EmailAddress, FullName, NicNumber,
    PhoneNumber, User, UserId, UserProfile, Username,
};
use kernel::KernelError;

use crate::backend::wire::Envelope;
use crate::backend::BackendClient;

pub struct BackendUserRepository {
    client: BackendClient,
}

impl BackendUserRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl UserQuery for BackendUserRepository {
    async fn find_current(&self, token: &AccessToken) -> error_stack::Result<User, KernelError> {
        let row: Envelope<UserRow> = self.client.get(&["users", "me"], Some(token)).await?;
        Ok(row.into_inner().into())
    }

    async fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError> {
        let rows: Envelope<Vec<UserRow>> = self.client.get(&["users", "all"], None).await?;
        Ok(rows.into_inner().into_iter().map(User::from).collect())
    }
}

#[async_trait::async_trait]
impl UserModifier for BackendUserRepository {
    async fn update(
        &self,
        token: &AccessToken,
        profile: &UserProfile,
    ) -> error_stack::Result<(), KernelError> {
        self.client
            .send(
                Method::PUT,
                &["users", "update"],
                Some(token),
                &ProfileBody::from(profile),
            )
            .await
    }

    async fn delete(&self, token: &AccessToken) -> error_stack::Result<(), KernelError> {
        self.client.delete(&["users", "delete"], Some(token)).await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::backend) struct UserRow {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default, rename = "NICNumber")]
    nic_number: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User::new(
            UserId::new(value.id),
            UserProfile::new(
                FullName::new(value.name),
                Username::new(value.username),
                EmailAddress::new(value.email),
                City::new(value.city),
                Address::new(value.address),
                PhoneNumber::new(value.phone_number),
                NicNumber::new(value.nic_number),
            ),
        )
    }
}

/// Profile fields as the backend names them; registration adds a password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::backend) struct ProfileBody {
    name: String,
    username: String,
    email: String,
    city: String,
    address: String,
    phone_number: String,
    #[serde(rename = "NICNumber")]
    nic_number: String,
}

impl From<&UserProfile> for ProfileBody {
    fn from(value: &UserProfile) -> Self {
        let DestructUserProfile {
            name,
            username,
            email,
            city,
            address,
            phone_number,
            nic_number,
        } = value.clone().into_destruct();
        Self {
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
