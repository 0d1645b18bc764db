use kernel::interface::query::{BookingQuery, DependOnBookingQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::Booking;
use kernel::KernelError;

use crate::transfer::{FinishBookingDto, ListBookingsDto, MyBookingsDto};

/// Booking screens of the administrator dashboard plus the customer's own history.
#[async_trait::async_trait]
pub trait ManageBookingService:
    'static + Sync + Send + DependOnBookingQuery + DependOnBookingModifier + DependOnUserQuery
{
    async fn list_bookings(
        &self,
        dto: ListBookingsDto,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let bookings = self.booking_query().find_all().await?;
        Ok(match dto.search {
            Some(term) => bookings
                .into_iter()
                .filter(|booking| booking.matches(&term))
                .collect(),
            None => bookings,
        })
    }

    /// A finished rental is removed, which frees its dates again.
    async fn finish_booking(&self, dto: FinishBookingDto) -> error_stack::Result<(), KernelError> {
        self.booking_modifier().delete(&dto.id).await?;
        tracing::info!(booking = %dto.id.as_ref(), "booking finished");
        Ok(())
    }

    async fn my_bookings(&self, dto: MyBookingsDto) -> error_stack::Result<Vec<Booking>, KernelError> {
        let user = self.user_query().find_current(&dto.session).await?;
        self.booking_query()
            .find_by_email(user.profile().email())
            .await
    }
}

impl<T> ManageBookingService for T where
    T: DependOnBookingQuery + DependOnBookingModifier + DependOnUserQuery
{
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use kernel::interface::query::{BookingQuery, DependOnBookingQuery, DependOnUserQuery, UserQuery};
    use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
    use kernel::prelude::entity::{
        AccessToken, Address, BookedCar, Booking, BookingId, CarModel, City, Customer,
        EmailAddress, FullName, NewBooking, NicNumber, PhoneNumber, RegistrationNumber,
        ReservedPeriod, TotalAmount, User, UserId, UserProfile, Username,
    };
    use kernel::KernelError;

    use super::ManageBookingService;
    use crate::transfer::{FinishBookingDto, ListBookingsDto, MyBookingsDto};

    fn booking(id: &str, model: &str, name: &str, email: &str) -> Booking {
        Booking::new(
            BookingId::new(id),
            BookedCar::new(None, Some(CarModel::new(model)), None),
            Customer::new(
                FullName::new(name),
                EmailAddress::new(email),
                PhoneNumber::new("0770000000"),
                None,
            ),
            ReservedPeriod::default(),
            false,
            TotalAmount::new(10_000),
        )
    }

    struct Desk {
        bookings: Vec<Booking>,
        deleted: Mutex<Vec<BookingId>>,
    }

    #[async_trait::async_trait]
    impl BookingQuery for Desk {
        async fn find_all(&self) -> error_stack::Result<Vec<Booking>, KernelError> {
            Ok(self.bookings.clone())
        }

        async fn find_by_car(
            &self,
            _: &RegistrationNumber,
        ) -> error_stack::Result<Vec<Booking>, KernelError> {
            Ok(Vec::new())
        }

        async fn find_by_email(
            &self,
            email: &EmailAddress,
        ) -> error_stack::Result<Vec<Booking>, KernelError> {
            Ok(self
                .bookings
                .iter()
                .filter(|booking| booking.customer().email() == email)
                .cloned()
                .collect())
        }
    }

    #[async_trait::async_trait]
    impl BookingModifier for Desk {
        async fn create(&self, _: &NewBooking) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn delete(&self, id: &BookingId) -> error_stack::Result<(), KernelError> {
            self.deleted.lock().unwrap().push(id.clone());
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl UserQuery for Desk {
        async fn find_current(&self, _: &AccessToken) -> error_stack::Result<User, KernelError> {
            Ok(User::new(
                UserId::new("u1"),
                UserProfile::new(
                    FullName::new("Nimal Perera"),
                    Username::new("nimal"),
                    EmailAddress::new("nimal@example.lk"),
                    City::new("Colombo"),
                    Address::new("1 Main St"),
                    PhoneNumber::new("0770000000"),
                    NicNumber::new("198812345678"),
                ),
            ))
        }

        async fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError> {
            Ok(Vec::new())
        }
    }

    impl DependOnBookingQuery for Desk {
        type BookingQuery = Self;
        fn booking_query(&self) -> &Self::BookingQuery {
            self
        }
    }

    impl DependOnBookingModifier for Desk {
        type BookingModifier = Self;
        fn booking_modifier(&self) -> &Self::BookingModifier {
            self
        }
    }

    impl DependOnUserQuery for Desk {
        type UserQuery = Self;
        fn user_query(&self) -> &Self::UserQuery {
            self
        }
    }

    fn desk() -> Desk {
        Desk {
            bookings: vec![
                booking("b1", "Vitz", "Nimal Perera", "nimal@example.lk"),
                booking("b2", "Aqua", "Kamala Dias", "kamala@example.lk"),
                booking("b3", "Vitz", "Kamala Dias", "kamala@example.lk"),
            ],
            deleted: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn search_matches_model_or_customer_name() {
        let desk = desk();
        let vitz = desk
            .list_bookings(ListBookingsDto {
                search: Some("VITZ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(vitz.len(), 2);

        let kamala = desk
            .list_bookings(ListBookingsDto {
                search: Some("kamala".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(kamala.len(), 2);
    }

    #[tokio::test]
    async fn my_bookings_use_profile_email() {
        let desk = desk();
        let mine = desk
            .my_bookings(MyBookingsDto {
                session: AccessToken::new("jwt"),
            })
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id(), &BookingId::new("b1"));
    }

    #[tokio::test]
    async fn finishing_deletes_the_booking() {
        let desk = desk();
        desk.finish_booking(FinishBookingDto {
            id: BookingId::new("b2"),
        })
        .await
        .unwrap();
        assert_eq!(*desk.deleted.lock().unwrap(), vec![BookingId::new("b2")]);
    }
}
