mod admin;
mod booking;
mod car;
mod review;
mod user;

pub use self::{admin::*, booking::*, car::*, review::*, user::*};
