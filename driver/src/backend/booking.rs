use reqwest::Method;
use serde::{Deserialize, Serialize};

use kernel::interface::query::BookingQuery;
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{
    BookedCar, Booking, BookingId, CalendarDate, CarId, CarModel, Customer, DestructCustomer,
    DestructNewBooking, EmailAddress, FullName, NewBooking, PhoneNumber, RegistrationNumber,
    ReservedPeriod, TotalAmount,
};
use kernel::KernelError;

use crate::backend::wire::{lenient_date, number, whole, Envelope};
use crate::backend::BackendClient;

pub struct BackendBookingRepository {
    client: BackendClient,
}

impl BackendBookingRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn list(&self, path: &[&str]) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows: Envelope<Vec<BookingRow>> = self.client.get(path, None).await?;
        Ok(rows.into_inner().into_iter().map(Booking::from).collect())
    }
}

#[async_trait::async_trait]
impl BookingQuery for BackendBookingRepository {
    async fn find_all(&self) -> error_stack::Result<Vec<Booking>, KernelError> {
        self.list(&["bookings"]).await
    }

    async fn find_by_car(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        self.list(&["bookings", "car", registration.as_ref().as_str()])
            .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        self.list(&["bookings", "email", email.as_ref().as_str()])
            .await
    }
}

#[async_trait::async_trait]
impl BookingModifier for BackendBookingRepository {
    async fn create(&self, booking: &NewBooking) -> error_stack::Result<(), KernelError> {
        self.client
            .send(Method::POST, &["bookings"], None, &BookingBody::from(booking))
            .await
    }

    async fn delete(&self, id: &BookingId) -> error_stack::Result<(), KernelError> {
        self.client
            .delete(&["bookings", id.as_ref().as_str()], None)
            .await
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CarRef {
    Id(String),
    #[serde(rename_all = "camelCase")]
    Summary {
        #[serde(default, rename = "_id")]
        id: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        car_id: Option<String>,
    },
}

fn booked_car(value: Option<CarRef>) -> BookedCar {
    match value {
        Some(CarRef::Id(id)) => BookedCar::new(Some(CarId::new(id)), None, None),
        Some(CarRef::Summary { id, model, car_id }) => BookedCar::new(
            id.map(CarId::new),
            model.map(CarModel::new),
            car_id.map(RegistrationNumber::new),
        ),
        None => BookedCar::default(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRow {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    car: Option<CarRef>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    alt_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    start_date: Option<CalendarDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    end_date: Option<CalendarDate>,
    #[serde(default)]
    with_driver: bool,
    #[serde(default, deserialize_with = "number")]
    total_amount: f64,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        Booking::new(
            BookingId::new(value.id),
            booked_car(value.car),
            Customer::new(
                FullName::new(value.name),
                EmailAddress::new(value.email),
                PhoneNumber::new(value.phone),
                value
                    .alt_phone
                    .filter(|phone| !phone.trim().is_empty())
                    .map(PhoneNumber::new),
            ),
            ReservedPeriod::new(value.start_date, value.end_date),
            value.with_driver,
            TotalAmount::new(whole(value.total_amount)),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingBody {
    car: String,
    name: String,
    email: String,
    phone: String,
    alt_phone: String,
    start_date: CalendarDate,
    end_date: CalendarDate,
    with_driver: bool,
    total_amount: i64,
}

impl From<&NewBooking> for BookingBody {
    fn from(value: &NewBooking) -> Self {
        let DestructNewBooking {
            car,
            customer,
            range,
            with_driver,
            total,
        } = value.clone().into_destruct();
        let DestructCustomer {
            name,
            email,
            phone,
            alt_phone,
        } = customer.into_destruct();
        Self {
            car: car.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            alt_phone: alt_phone.map(Into::into).unwrap_or_default(),
            start_date: *range.start(),
            end_date: *range.end(),
            with_driver,
            total_amount: total.into(),
        }
    }
}
