use driver::backend::{BackendBookingRepository, BackendCarRepository, BackendClient};
use kernel::interface::query::{BookingQuery, CarQuery};
use kernel::prelude::availability::expand_blocked_dates;
use kernel::prelude::entity::Booking;
use kernel::KernelError;

#[test_with::env(BACKEND_TEST)]
#[tokio::test]
async fn fleet_and_bookings_decode() -> error_stack::Result<(), KernelError> {
    let client = BackendClient::from_env()?;
    let cars = BackendCarRepository::new(client.clone());
    let bookings = BackendBookingRepository::new(client);

    for car in cars.find_all().await?.iter().take(3) {
        let registration = car.spec().registration();
        assert!(cars.find_by_registration(registration).await?.is_some());

        let reserved = bookings.find_by_car(registration).await?;
        let blocked = expand_blocked_dates(reserved.iter().map(Booking::period));
        let readable = reserved
            .iter()
            .filter(|booking| booking.period().range().is_some())
            .count();
        assert!(readable == 0 || !blocked.is_empty());
    }
    Ok(())
}
