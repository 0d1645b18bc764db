mod admin;
mod booking;
mod calendar;
mod car;
mod contact;
mod payment;
mod review;
mod session;
mod user;

pub use self::{
    admin::*, booking::*, calendar::*, car::*, contact::*, payment::*, review::*, session::*,
    user::*,
};
