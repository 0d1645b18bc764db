use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::{
    BookingFormDto, BookingOutcome, BookingReceiptDto, BookingRejection, CustomerPrefillDto,
    DateCheckDto,
};
use kernel::prelude::availability::{BlockedDates, RangeCheck};
use kernel::prelude::entity::{
    Booking, CalendarDate, Customer, DestructBookedCar, DestructBooking, DestructCustomer,
    DestructNewBooking, PaymentIntent,
};
use kernel::prelude::pricing::RentalQuote;

use crate::controller::Exhaust;
use crate::response::CarResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    name: String,
    email: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alt_phone: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let DestructCustomer {
            name,
            email,
            phone,
            alt_phone,
        } = value.into_destruct();
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            alt_phone: alt_phone.map(Into::into),
        }
    }
}

impl From<CustomerPrefillDto> for CustomerResponse {
    fn from(value: CustomerPrefillDto) -> Self {
        Self {
            name: value.name.into(),
            email: value.email.into(),
            phone: value.phone.into(),
            alt_phone: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormResponse {
    car: CarResponse,
    blocked_dates: BlockedDates,
    earliest_start: CalendarDate,
    prefill: Option<CustomerResponse>,
}

impl IntoResponse for BookingFormResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    days: i64,
    rent_per_day: i64,
    driver_fee: i64,
    total_amount: i64,
}

impl From<RentalQuote> for QuoteResponse {
    fn from(value: RentalQuote) -> Self {
        Self {
            days: value.days(),
            rent_per_day: value.rent_per_day().into(),
            driver_fee: value.driver_fee(),
            total_amount: value.total().into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCheckResponse {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<QuoteResponse>,
}

impl IntoResponse for DateCheckResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResponse {
    car_id: String,
    customer: CustomerResponse,
    start_date: CalendarDate,
    end_date: CalendarDate,
    with_driver: bool,
    quote: QuoteResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    earliest_start: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_date: Option<CalendarDate>,
}

/// Refusals are part of the form flow, not failures of the request.
#[derive(Debug)]
pub enum BookingOutcomeResponse {
    Submitted(SubmittedResponse),
    Rejected(StatusCode, RejectedResponse),
}

impl IntoResponse for BookingOutcomeResponse {
    fn into_response(self) -> Response {
        match self {
            BookingOutcomeResponse::Submitted(body) => {
                (StatusCode::CREATED, Json(body)).into_response()
            }
            BookingOutcomeResponse::Rejected(status, body) => (status, Json(body)).into_response(),
        }
    }
}

impl From<BookingRejection> for BookingOutcomeResponse {
    fn from(value: BookingRejection) -> Self {
        match value {
            BookingRejection::StartBeforeEarliest { earliest_start } => Self::Rejected(
                StatusCode::UNPROCESSABLE_ENTITY,
                RejectedResponse {
                    message: "Start date must be from tomorrow onwards.",
                    earliest_start: Some(earliest_start),
                    conflicting_date: None,
                },
            ),
            BookingRejection::EndNotAfterStart => Self::Rejected(
                StatusCode::UNPROCESSABLE_ENTITY,
                RejectedResponse {
                    message: "End date must be after start date.",
                    earliest_start: None,
                    conflicting_date: None,
                },
            ),
            BookingRejection::Unavailable { conflicting_date } => Self::Rejected(
                StatusCode::CONFLICT,
                RejectedResponse {
                    message: "Selected dates conflict with existing bookings.",
                    earliest_start: None,
                    conflicting_date: Some(conflicting_date),
                },
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedCarResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    id: String,
    car: BookedCarResponse,
    customer: CustomerResponse,
    start_date: Option<CalendarDate>,
    end_date: Option<CalendarDate>,
    with_driver: bool,
    total_amount: i64,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            car,
            customer,
            period,
            with_driver,
            total,
        } = value.into_destruct();
        let DestructBookedCar {
            id: car_id,
            model,
            registration,
        } = car.into_destruct();
        Self {
            id: id.into(),
            car: BookedCarResponse {
                id: car_id.map(Into::into),
                model: model.map(Into::into),
                registration: registration.map(Into::into),
            },
            customer: customer.into(),
            start_date: *period.start(),
            end_date: *period.end(),
            with_driver,
            total_amount: total.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    client_secret: String,
}

pub struct BookingPresenter;

impl Exhaust<Option<BookingFormDto>> for BookingPresenter {
    type To = Option<BookingFormResponse>;
    fn emit(&self, input: Option<BookingFormDto>) -> Self::To {
        input.map(|form| BookingFormResponse {
            car: form.car.into(),
            blocked_dates: form.blocked_dates,
            earliest_start: form.earliest_start,
            prefill: form.prefill.map(CustomerResponse::from),
        })
    }
}

impl Exhaust<Option<DateCheckDto>> for BookingPresenter {
    type To = Option<DateCheckResponse>;
    fn emit(&self, input: Option<DateCheckDto>) -> Self::To {
        input.map(|checked| {
            let conflicting_date = match checked.check {
                RangeCheck::Available => None,
                RangeCheck::Conflict { conflicting_date } => Some(conflicting_date),
            };
            DateCheckResponse {
                available: checked.check.is_available(),
                conflicting_date,
                quote: checked.quote.map(QuoteResponse::from),
            }
        })
    }
}

impl Exhaust<BookingOutcome> for BookingPresenter {
    type To = BookingOutcomeResponse;
    fn emit(&self, input: BookingOutcome) -> Self::To {
        match input {
            BookingOutcome::Submitted(BookingReceiptDto { booking, quote }) => {
                let DestructNewBooking {
                    car,
                    customer,
                    range,
                    with_driver,
                    ..
                } = booking.into_destruct();
                BookingOutcomeResponse::Submitted(SubmittedResponse {
                    car_id: car.into(),
                    customer: customer.into(),
                    start_date: *range.start(),
                    end_date: *range.end(),
                    with_driver,
                    quote: quote.into(),
                })
            }
            BookingOutcome::Rejected(rejection) => rejection.into(),
        }
    }
}

impl Exhaust<Vec<Booking>> for BookingPresenter {
    type To = Json<Vec<BookingResponse>>;
    fn emit(&self, input: Vec<Booking>) -> Self::To {
        Json(input.into_iter().map(BookingResponse::from).collect())
    }
}

impl Exhaust<PaymentIntent> for BookingPresenter {
    type To = Json<PaymentIntentResponse>;
    fn emit(&self, input: PaymentIntent) -> Self::To {
        Json(PaymentIntentResponse {
            client_secret: input.client_secret().clone().into(),
        })
    }
}
