use garde::Validate;
use serde::Deserialize;

use application::transfer::{
    CheckDatesDto, CreatePaymentIntentDto, FinishBookingDto, GetBookingFormDto, ListBookingsDto,
    MyBookingsDto, SubmitBookingDto,
};
use kernel::prelude::availability::CandidateRange;
use kernel::prelude::entity::{BookingId, CalendarDate, RegistrationNumber, TotalAmount};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use crate::request::Session;

/// Date fields as the picker sends them; blank means not chosen yet.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatesRequest {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    with_driver: bool,
}

impl DatesRequest {
    fn candidate(&self) -> error_stack::Result<CandidateRange, KernelError> {
        Ok(CandidateRange::new(
            picked(self.start_date.as_deref())?,
            picked(self.end_date.as_deref())?,
        ))
    }
}

fn picked(raw: Option<&str>) -> error_stack::Result<Option<CalendarDate>, KernelError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(day) => CalendarDate::parse(day).map(Some),
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    email: String,
    #[garde(length(min = 1))]
    phone: String,
    #[serde(default)]
    #[garde(skip)]
    alt_phone: Option<String>,
    #[serde(flatten)]
    #[garde(skip)]
    dates: DatesRequest,
}

#[derive(Debug)]
pub struct BookingFormRequest {
    registration: String,
    session: Option<Session>,
}

impl BookingFormRequest {
    pub fn new(registration: String, session: Option<Session>) -> Self {
        Self {
            registration,
            session,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBookingsRequest {
    search: Option<String>,
}

#[derive(Debug)]
pub struct FinishBookingRequest {
    id: String,
}

impl FinishBookingRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    #[garde(range(min = 1, max = 10_000_000_000))]
    total_amount: i64,
}

pub struct BookingTransformer;

impl Intake<BookingFormRequest> for BookingTransformer {
    type To = GetBookingFormDto;
    fn emit(&self, input: BookingFormRequest) -> Self::To {
        GetBookingFormDto {
            registration: RegistrationNumber::new(input.registration),
            session: input.session.map(Session::token),
        }
    }
}

impl TryIntake<(String, DatesRequest)> for BookingTransformer {
    type To = CheckDatesDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (String, DatesRequest)) -> Result<Self::To, Self::Error> {
        let (registration, dates) = input;
        Ok(CheckDatesDto {
            registration: RegistrationNumber::new(registration),
            candidate: dates.candidate()?,
            with_driver: dates.with_driver,
        })
    }
}

impl TryIntake<(String, SubmitBookingRequest)> for BookingTransformer {
    type To = SubmitBookingDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (String, SubmitBookingRequest)) -> Result<Self::To, Self::Error> {
        let (registration, input) = input;
        input.validate()?;
        Ok(SubmitBookingDto {
            registration: RegistrationNumber::new(registration),
            candidate: input.dates.candidate()?,
            with_driver: input.dates.with_driver,
            name: input.name,
            email: input.email,
            phone: input.phone,
            alt_phone: input.alt_phone,
        })
    }
}

impl Intake<ListBookingsRequest> for BookingTransformer {
    type To = ListBookingsDto;
    fn emit(&self, input: ListBookingsRequest) -> Self::To {
        ListBookingsDto {
            search: input.search,
        }
    }
}

impl Intake<FinishBookingRequest> for BookingTransformer {
    type To = FinishBookingDto;
    fn emit(&self, input: FinishBookingRequest) -> Self::To {
        FinishBookingDto {
            id: BookingId::new(input.id),
        }
    }
}

impl Intake<Session> for BookingTransformer {
    type To = MyBookingsDto;
    fn emit(&self, input: Session) -> Self::To {
        MyBookingsDto {
            session: input.token(),
        }
    }
}

impl TryIntake<PaymentIntentRequest> for BookingTransformer {
    type To = CreatePaymentIntentDto;
    type Error = ErrorStatus;
    fn emit(&self, input: PaymentIntentRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreatePaymentIntentDto {
            total: TotalAmount::new(input.total_amount),
        })
    }
}
