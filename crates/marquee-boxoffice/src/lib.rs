//! Box-office domain types and pricing logic for Marquee.
//!
//! This crate provides the types for pricing movie reservations:
//!
//! - **Catalog**: Movies, each holding one replaceable discount policy
//! - **Pricing**: Discount policies gated by OR-combined conditions
//! - **Booking**: Screenings, customers, and fee-snapshotting reservations
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_boxoffice::prelude::*;
//!
//! // A 10,000-won movie discounted 800 won for its first screening
//! let movie = Arc::new(Movie::new(
//!     "Avatar",
//!     Duration::from_secs(120 * 60),
//!     Money::wons(10_000),
//!     DiscountPolicy::amount(Money::wons(800), vec![DiscountCondition::sequence(1)])?,
//! ));
//!
//! let screening = Screening::new(movie, 1, starts_at)?;
//! let reservation = screening.reserve(&Customer::new("Kim"), 2)?;
//! assert_eq!(reservation.fee, Money::wons(18_400));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod booking;
pub mod catalog;
pub mod pricing;

pub use error::BoxOfficeError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::BoxOfficeError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::Movie;

    // Pricing
    pub use crate::pricing::{DiscountCondition, DiscountPolicy};

    // Booking
    pub use crate::booking::{Customer, Reservation, Screening};
}
