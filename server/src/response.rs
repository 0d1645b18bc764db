use axum::http::StatusCode;

use crate::controller::Exhaust;

mod account;
mod booking;
mod car;
mod review;

pub use self::{account::*, booking::*, car::*, review::*};

/// Answers a unit result with a bare status.
pub struct Acknowledge(pub StatusCode);

impl Exhaust<()> for Acknowledge {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        self.0
    }
}
