mod account;
mod booking;
mod car;
mod review;
mod session;

pub use self::{account::*, booking::*, car::*, review::*, session::*};
