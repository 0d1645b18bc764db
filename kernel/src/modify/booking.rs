use crate::entity::{BookingId, NewBooking};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    async fn create(&self, booking: &NewBooking) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, id: &BookingId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send {
    type BookingModifier: BookingModifier;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
