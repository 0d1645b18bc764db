mod account;
mod booking;
mod car;
mod review;

pub use self::{account::*, booking::*, car::*, review::*};
