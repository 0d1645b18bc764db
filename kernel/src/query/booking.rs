use crate::entity::{Booking, EmailAddress, RegistrationNumber};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Booking>, KernelError>;

    async fn find_by_car(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
}

pub trait DependOnBookingQuery: Sync + Send + 'static {
    type BookingQuery: BookingQuery;
    fn booking_query(&self) -> &Self::BookingQuery;
}
