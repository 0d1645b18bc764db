use crate::entity::{AccessToken, AdminRegistration, Credentials, CustomerSession, UserRegistration};
use crate::KernelError;

#[async_trait::async_trait]
pub trait Authenticator: 'static + Sync + Send {
    async fn register_user(
        &self,
        registration: &UserRegistration,
    ) -> error_stack::Result<(), KernelError>;

    async fn login_user(
        &self,
        credentials: &Credentials,
    ) -> error_stack::Result<CustomerSession, KernelError>;

    async fn register_admin(
        &self,
        registration: &AdminRegistration,
    ) -> error_stack::Result<(), KernelError>;

    async fn login_admin(
        &self,
        credentials: &Credentials,
    ) -> error_stack::Result<AccessToken, KernelError>;
}

pub trait DependOnAuthenticator: 'static + Sync + Send {
    type Authenticator: Authenticator;
    fn authenticator(&self) -> &Self::Authenticator;
}
