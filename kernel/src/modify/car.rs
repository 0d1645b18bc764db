use crate::entity::{CarSpec, RegistrationNumber};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarModifier: 'static + Sync + Send {
    async fn create(&self, spec: &CarSpec) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        registration: &RegistrationNumber,
        spec: &CarSpec,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, registration: &RegistrationNumber)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCarModifier: 'static + Sync + Send {
    type CarModifier: CarModifier;
    fn car_modifier(&self) -> &Self::CarModifier;
}
