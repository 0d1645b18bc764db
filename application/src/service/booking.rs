use error_stack::{Report, ResultExt};
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::payment::{DependOnPaymentGateway, PaymentGateway};
use kernel::interface::query::{
    BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery, DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::availability::{expand_blocked_dates, validate_range, BlockedDates, RangeCheck};
use kernel::prelude::entity::{
    Booking, CalendarDate, Customer, EmailAddress, FullName, NewBooking, PaymentIntent,
    PhoneNumber, RegistrationNumber,
};
use kernel::prelude::pricing::RentalQuote;
use kernel::KernelError;

use crate::transfer::{
    BookingFormDto, BookingOutcome, BookingReceiptDto, BookingRejection, CheckDatesDto,
    CreatePaymentIntentDto, CustomerPrefillDto, DateCheckDto, GetBookingFormDto,
    SubmitBookingDto,
};

#[async_trait::async_trait]
pub trait BookingService:
    'static
    + Sync
    + Send
    + DependOnCarQuery
    + DependOnBookingQuery
    + DependOnBookingModifier
    + DependOnUserQuery
    + DependOnClock
{
    /// Days already reserved for the car, ready for a date picker.
    async fn blocked_dates(
        &self,
        registration: &RegistrationNumber,
    ) -> error_stack::Result<BlockedDates, KernelError> {
        let bookings = self.booking_query().find_by_car(registration).await?;
        Ok(expand_blocked_dates(bookings.iter().map(Booking::period)))
    }

    /// Bookings may start tomorrow at the earliest.
    fn earliest_start(&self) -> error_stack::Result<CalendarDate, KernelError> {
        let today = self.clock().today();
        today.next_day().ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("no calendar day follows {today}"))
        })
    }

    async fn booking_form(
        &self,
        dto: GetBookingFormDto,
    ) -> error_stack::Result<Option<BookingFormDto>, KernelError> {
        let Some(car) = self
            .car_query()
            .find_by_registration(&dto.registration)
            .await?
        else {
            return Ok(None);
        };
        let blocked_dates = self.blocked_dates(&dto.registration).await?;
        let earliest_start = self.earliest_start()?;

        let prefill = match dto.session {
            Some(token) => match self.user_query().find_current(&token).await {
                Ok(user) => Some(CustomerPrefillDto::from(user)),
                Err(report) => {
                    tracing::warn!("booking form shown without prefill: {report:?}");
                    None
                }
            },
            None => None,
        };

        Ok(Some(BookingFormDto {
            car,
            blocked_dates,
            earliest_start,
            prefill,
        }))
    }

    async fn check_dates(
        &self,
        dto: CheckDatesDto,
    ) -> error_stack::Result<Option<DateCheckDto>, KernelError> {
        let range = dto
            .candidate
            .resolve()
            .change_context(KernelError::Invalid)?;
        let Some(car) = self
            .car_query()
            .find_by_registration(&dto.registration)
            .await?
        else {
            return Ok(None);
        };
        let blocked = self.blocked_dates(&dto.registration).await?;
        let check = validate_range(&dto.candidate, &blocked).change_context(KernelError::Invalid)?;
        let quote = check
            .is_available()
            .then(|| RentalQuote::new(*car.spec().rent_per_day(), &range, dto.with_driver))
            .transpose()?;
        Ok(Some(DateCheckDto { check, quote }))
    }

    async fn submit_booking(
        &self,
        dto: SubmitBookingDto,
    ) -> error_stack::Result<BookingOutcome, KernelError> {
        let SubmitBookingDto {
            registration,
            name,
            email,
            phone,
            alt_phone,
            candidate,
            with_driver,
        } = dto;
        if [&name, &email, &phone]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("name, email and phone are required".to_string()));
        }
        let range = candidate.resolve().change_context(KernelError::Invalid)?;

        let earliest_start = self.earliest_start()?;
        if *range.start() < earliest_start {
            return Ok(BookingOutcome::Rejected(
                BookingRejection::StartBeforeEarliest { earliest_start },
            ));
        }
        if range.nights() < 1 {
            return Ok(BookingOutcome::Rejected(BookingRejection::EndNotAfterStart));
        }

        let car = self
            .car_query()
            .find_by_registration(&registration)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("no car registered as {}", registration.as_ref()))
            })?;
        let blocked = self.blocked_dates(&registration).await?;
        if let RangeCheck::Conflict { conflicting_date } =
            validate_range(&candidate, &blocked).change_context(KernelError::Invalid)?
        {
            return Ok(BookingOutcome::Rejected(BookingRejection::Unavailable {
                conflicting_date,
            }));
        }

        let quote = RentalQuote::new(*car.spec().rent_per_day(), &range, with_driver)?;
        let customer = Customer::new(
            FullName::new(name.trim()),
            EmailAddress::new(email.trim()),
            PhoneNumber::new(phone.trim()),
            alt_phone
                .filter(|alt| !alt.trim().is_empty())
                .map(|alt| PhoneNumber::new(alt.trim())),
        );
        let booking = NewBooking::new(
            car.id().clone(),
            customer,
            range,
            with_driver,
            quote.total(),
        );
        self.booking_modifier().create(&booking).await?;
        tracing::info!(
            car = %registration.as_ref(),
            start = %range.start(),
            end = %range.end(),
            total = quote.total().as_ref(),
            "booking submitted"
        );

        Ok(BookingOutcome::Submitted(BookingReceiptDto { booking, quote }))
    }
}

impl<T> BookingService for T where
    T: DependOnCarQuery
        + DependOnBookingQuery
        + DependOnBookingModifier
        + DependOnUserQuery
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait PaymentService: 'static + Sync + Send + DependOnPaymentGateway {
    async fn create_payment_intent(
        &self,
        dto: CreatePaymentIntentDto,
    ) -> error_stack::Result<PaymentIntent, KernelError> {
        if *dto.total.as_ref() <= 0 {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("payment amount must be positive".to_string()));
        }
        self.payment_gateway().create_intent(&dto.total).await
    }
}

impl<T> PaymentService for T where T: DependOnPaymentGateway {}
