use driver::backend::{
    BackendAdminRepository, BackendAuthenticator, BackendBookingRepository, BackendCarRepository,
    BackendClient, BackendPaymentGateway, BackendReviewRepository, BackendUserRepository,
};
use driver::clock::SystemClock;
use kernel::interface::auth::DependOnAuthenticator;
use kernel::interface::clock::DependOnClock;
use kernel::interface::payment::DependOnPaymentGateway;
use kernel::interface::query::{
    DependOnAdminQuery, DependOnBookingQuery, DependOnCarQuery, DependOnReviewQuery,
    DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAdminModifier, DependOnBookingModifier, DependOnCarModifier, DependOnReviewModifier,
    DependOnUserModifier,
};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    cars: BackendCarRepository,
    bookings: BackendBookingRepository,
    users: BackendUserRepository,
    admins: BackendAdminRepository,
    reviews: BackendReviewRepository,
    auth: BackendAuthenticator,
    payments: BackendPaymentGateway,
    clock: SystemClock,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let client = BackendClient::from_env()?;
        tracing::info!("backend client ready");

        Ok(Self {
            cars: BackendCarRepository::new(client.clone()),
            bookings: BackendBookingRepository::new(client.clone()),
            users: BackendUserRepository::new(client.clone()),
            admins: BackendAdminRepository::new(client.clone()),
            reviews: BackendReviewRepository::new(client.clone()),
            auth: BackendAuthenticator::new(client.clone()),
            payments: BackendPaymentGateway::new(client),
            clock: SystemClock,
        })
    }
}

impl DependOnCarQuery for Handler {
    type CarQuery = BackendCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &self.cars
    }
}

impl DependOnCarModifier for Handler {
    type CarModifier = BackendCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &self.cars
    }
}

impl DependOnBookingQuery for Handler {
    type BookingQuery = BackendBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &self.bookings
    }
}

impl DependOnBookingModifier for Handler {
    type BookingModifier = BackendBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &self.bookings
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = BackendUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &self.users
    }
}

impl DependOnUserModifier for Handler {
    type UserModifier = BackendUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.users
    }
}

impl DependOnAdminQuery for Handler {
    type AdminQuery = BackendAdminRepository;
    fn admin_query(&self) -> &Self::AdminQuery {
        &self.admins
    }
}

impl DependOnAdminModifier for Handler {
    type AdminModifier = BackendAdminRepository;
    fn admin_modifier(&self) -> &Self::AdminModifier {
        &self.admins
    }
}

impl DependOnReviewQuery for Handler {
    type ReviewQuery = BackendReviewRepository;
    fn review_query(&self) -> &Self::ReviewQuery {
        &self.reviews
    }
}

impl DependOnReviewModifier for Handler {
    type ReviewModifier = BackendReviewRepository;
    fn review_modifier(&self) -> &Self::ReviewModifier {
        &self.reviews
    }
}

impl DependOnAuthenticator for Handler {
    type Authenticator = BackendAuthenticator;
    fn authenticator(&self) -> &Self::Authenticator {
        &self.auth
    }
}

impl DependOnPaymentGateway for Handler {
    type PaymentGateway = BackendPaymentGateway;
    fn payment_gateway(&self) -> &Self::PaymentGateway {
        &self.payments
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}
