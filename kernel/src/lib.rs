pub use crate::error::*;

mod auth;
mod availability;
mod clock;
mod entity;
mod error;
mod modify;
mod payment;
mod pricing;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod availability {
        pub use crate::availability::*;
    }
    pub mod pricing {
        pub use crate::pricing::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod auth {
        pub use crate::auth::*;
    }
    pub mod clock {
        pub use crate::clock::*;
    }
    pub mod payment {
        pub use crate::payment::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
