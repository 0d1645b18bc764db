use crate::entity::{AccessToken, AdminProfile};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AdminModifier: 'static + Sync + Send {
    async fn update(
        &self,
        token: &AccessToken,
        profile: &AdminProfile,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAdminModifier: 'static + Sync + Send {
    type AdminModifier: AdminModifier;
    fn admin_modifier(&self) -> &Self::AdminModifier;
}
