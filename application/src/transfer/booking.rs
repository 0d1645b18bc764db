use kernel::prelude::availability::{BlockedDates, CandidateRange, RangeCheck};
use kernel::prelude::entity::{
    AccessToken, BookingId, CalendarDate, Car, DestructUser, DestructUserProfile, EmailAddress,
    FullName, NewBooking, PhoneNumber, RegistrationNumber, TotalAmount, User,
};
use kernel::prelude::pricing::RentalQuote;

pub struct GetBookingFormDto {
    pub registration: RegistrationNumber,
    pub session: Option<AccessToken>,
}

/// Contact details copied from the logged-in customer's profile.
#[derive(Debug, Clone)]
pub struct CustomerPrefillDto {
    pub name: FullName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl From<User> for CustomerPrefillDto {
    fn from(value: User) -> Self {
        let DestructUser { profile, .. } = value.into_destruct();
        let DestructUserProfile {
            name,
            email,
            phone_number,
            ..
        } = profile.into_destruct();
        Self {
            name,
            email,
            phone: phone_number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingFormDto {
    pub car: Car,
    pub blocked_dates: BlockedDates,
    pub earliest_start: CalendarDate,
    pub prefill: Option<CustomerPrefillDto>,
}

pub struct CheckDatesDto {
    pub registration: RegistrationNumber,
    pub candidate: CandidateRange,
    pub with_driver: bool,
}

#[derive(Debug, Clone)]
pub struct DateCheckDto {
    pub check: RangeCheck,
    pub quote: Option<RentalQuote>,
}

pub struct SubmitBookingDto {
    pub registration: RegistrationNumber,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub candidate: CandidateRange,
    pub with_driver: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingRejection {
    StartBeforeEarliest { earliest_start: CalendarDate },
    EndNotAfterStart,
    Unavailable { conflicting_date: CalendarDate },
}

#[derive(Debug, Clone)]
pub struct BookingReceiptDto {
    pub booking: NewBooking,
    pub quote: RentalQuote,
}

#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Submitted(BookingReceiptDto),
    Rejected(BookingRejection),
}

pub struct CreatePaymentIntentDto {
    pub total: TotalAmount,
}

pub struct ListBookingsDto {
    pub search: Option<String>,
}

pub struct FinishBookingDto {
    pub id: BookingId,
}

pub struct MyBookingsDto {
    pub session: AccessToken,
}
