use crate::entity::{Car, RegistrationNumber};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Car>, KernelError>;

    async fn find_by_registration(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<Option<Car>, KernelError>;
}

pub trait DependOnCarQuery: Sync + Send + 'static {
    type CarQuery: CarQuery;
    fn car_query(&self) -> &Self::CarQuery;
}
