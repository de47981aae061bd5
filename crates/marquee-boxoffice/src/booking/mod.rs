//! Booking module.
//!
//! Contains screenings, customers, and the reservations produced when a
//! customer books seats for a screening.

mod customer;
mod reservation;
mod screening;

pub use customer::Customer;
pub use reservation::Reservation;
pub use screening::Screening;
