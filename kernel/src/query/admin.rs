use crate::entity::{AccessToken, Admin};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AdminQuery: Sync + Send + 'static {
    async fn find_current(&self, token: &AccessToken) -> error_stack::Result<Admin, KernelError>;
}

pub trait DependOnAdminQuery: Sync + Send + 'static {
    type AdminQuery: AdminQuery;
    fn admin_query(&self) -> &Self::AdminQuery;
}
