mod account;
mod booking;
mod car;
mod manage;
mod review;

pub use self::{account::*, booking::*, car::*, manage::*, review::*};
