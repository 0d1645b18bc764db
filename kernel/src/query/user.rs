use crate::entity::{AccessToken, User};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserQuery: Sync + Send + 'static {
    /// The customer the token was issued to.
    async fn find_current(&self, token: &AccessToken) -> error_stack::Result<User, KernelError>;

    async fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError>;
}

pub trait DependOnUserQuery: Sync + Send + 'static {
    type UserQuery: UserQuery;
    fn user_query(&self) -> &Self::UserQuery;
}
