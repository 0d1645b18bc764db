use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::query::AdminQuery;
use kernel::interface::update::AdminModifier;
use kernel::prelude::entity::{
    AccessToken, Admin, AdminId, AdminProfile, DestructAdminProfile, EmailAddress, FullName,
    StaffId,
};
use kernel::KernelError;

use crate::backend::wire::Envelope;
use crate::backend::BackendClient;

pub struct BackendAdminRepository {
    client: BackendClient,
}

impl BackendAdminRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl AdminQuery for BackendAdminRepository {
    async fn find_current(&self, token: &AccessToken) -> error_stack::Result<Admin, KernelError> {
        let row: Envelope<AdminRow> = self.client.get(&["admin", "me"], Some(token)).await?;
        Ok(row.into_inner().into())
    }
}

#[async_trait::async_trait]
impl AdminModifier for BackendAdminRepository {
    async fn update(
        &self,
        token: &AccessToken,
        profile: &AdminProfile,
    ) -> error_stack::Result<(), KernelError> {
        self.client
            .send(
                Method::PUT,
                &["admin", "update"],
                Some(token),
                &AdminBody::from(profile),
            )
            .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminRow {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    email: String,
}

impl From<AdminRow> for Admin {
    fn from(value: AdminRow) -> Self {
        Admin::new(
            AdminId::new(value.id),
            AdminProfile::new(
                FullName::new(value.name),
                StaffId::new(value.user_id),
                EmailAddress::new(value.email),
            ),
        )
    }
}

/// The backend calls the staff id `userId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::backend) struct AdminBody {
    name: String,
    user_id: String,
    email: String,
}

impl From<&AdminProfile> for AdminBody {
    fn from(value: &AdminProfile) -> Self {
        let DestructAdminProfile {
            name,
            staff_id,
            email,
        } = value.clone().into_destruct();
        Self {
            name: name.into(),
            user_id: staff_id.into(),
            email: email.into(),
        }
    }
}
