use crate::entity::{AccessToken, UserProfile};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier: 'static + Sync + Send {
    async fn update(
        &self,
        token: &AccessToken,
        profile: &UserProfile,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, token: &AccessToken) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier: 'static + Sync + Send {
    type UserModifier: UserModifier;
    fn user_modifier(&self) -> &Self::UserModifier;
}
