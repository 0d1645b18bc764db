use kernel::interface::auth::{Authenticator, DependOnAuthenticator};
use kernel::interface::query::{AdminQuery, DependOnAdminQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{
    AdminModifier, DependOnAdminModifier, DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{AccessToken, Admin, CustomerSession, User};
use kernel::KernelError;

use crate::transfer::{
    ListUsersDto, LoginDto, RegisterAdminDto, RegisterUserDto, SessionDto, UpdateAdminDto,
    UpdateUserDto,
};

#[async_trait::async_trait]
pub trait AccountService:
    'static + Sync + Send + DependOnAuthenticator + DependOnUserQuery + DependOnUserModifier
{
    async fn register(&self, dto: RegisterUserDto) -> error_stack::Result<(), KernelError> {
        self.authenticator()
            .register_user(&dto.registration)
            .await?;
        tracing::info!(
            email = %dto.registration.profile().email().as_ref(),
            "customer registered"
        );
        Ok(())
    }

    async fn login(&self, dto: LoginDto) -> error_stack::Result<CustomerSession, KernelError> {
        self.authenticator().login_user(&dto.credentials).await
    }

    async fn current_user(&self, dto: SessionDto) -> error_stack::Result<User, KernelError> {
        self.user_query().find_current(&dto.token).await
    }

    /// Saves the profile and returns it as the backend now reports it.
    async fn update_profile(&self, dto: UpdateUserDto) -> error_stack::Result<User, KernelError> {
        self.user_modifier()
            .update(&dto.token, &dto.profile)
            .await?;
        self.user_query().find_current(&dto.token).await
    }

    async fn delete_account(&self, dto: SessionDto) -> error_stack::Result<(), KernelError> {
        self.user_modifier().delete(&dto.token).await?;
        tracing::info!("customer account deleted");
        Ok(())
    }

    async fn list_users(&self, dto: ListUsersDto) -> error_stack::Result<Vec<User>, KernelError> {
        let users = self.user_query().find_all().await?;
        Ok(match dto.nic {
            Some(nic) => users
                .into_iter()
                .filter(|user| user.nic_matches(&nic))
                .collect(),
            None => users,
        })
    }
}

impl<T> AccountService for T where
    T: DependOnAuthenticator + DependOnUserQuery + DependOnUserModifier
{
}

#[async_trait::async_trait]
pub trait AdminAccountService:
    'static + Sync + Send + DependOnAuthenticator + DependOnAdminQuery + DependOnAdminModifier
{
    async fn register_admin(&self, dto: RegisterAdminDto) -> error_stack::Result<(), KernelError> {
        self.authenticator()
            .register_admin(&dto.registration)
            .await?;
        tracing::info!(
            staff_id = %dto.registration.profile().staff_id().as_ref(),
            "administrator registered"
        );
        Ok(())
    }

    async fn login_admin(&self, dto: LoginDto) -> error_stack::Result<AccessToken, KernelError> {
        self.authenticator().login_admin(&dto.credentials).await
    }

    async fn current_admin(&self, dto: SessionDto) -> error_stack::Result<Admin, KernelError> {
        self.admin_query().find_current(&dto.token).await
    }

    async fn update_admin(&self, dto: UpdateAdminDto) -> error_stack::Result<Admin, KernelError> {
        self.admin_modifier()
            .update(&dto.token, &dto.profile)
            .await?;
        self.admin_query().find_current(&dto.token).await
    }
}

impl<T> AdminAccountService for T where
    T: DependOnAuthenticator + DependOnAdminQuery + DependOnAdminModifier
{
}
