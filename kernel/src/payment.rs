use crate::entity::{PaymentIntent, TotalAmount};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PaymentGateway: 'static + Sync + Send {
    async fn create_intent(
        &self,
        amount: &TotalAmount,
    ) -> error_stack::Result<PaymentIntent, KernelError>;
}

pub trait DependOnPaymentGateway: 'static + Sync + Send {
    type PaymentGateway: PaymentGateway;
    fn payment_gateway(&self) -> &Self::PaymentGateway;
}
