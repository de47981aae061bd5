//! Reservation records.

use crate::booking::{Customer, Screening};
use crate::ids::{CustomerId, ReservationId, ScreeningId};
use crate::money::Money;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A completed reservation.
///
/// Produced only by [`Screening::reserve`]. The fee is a snapshot taken at
/// reservation time; swapping the movie's discount policy afterwards never
/// changes an existing reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Who reserved.
    pub customer_id: CustomerId,
    /// Which screening.
    pub screening_id: ScreeningId,
    /// Movie title (denormalized for display and receipts).
    pub movie_title: String,
    /// Screening start (denormalized).
    pub screening_starts_at: NaiveDateTime,
    /// Number of seats reserved.
    pub audience_count: i64,
    /// Per-ticket fee at reservation time.
    pub ticket_fee: Money,
    /// Total fee: ticket fee times audience count.
    pub fee: Money,
    /// Unix timestamp of the booking.
    pub reserved_at: i64,
}

impl Reservation {
    /// Create a reservation snapshot. Only `Screening::reserve` calls this.
    pub(crate) fn new(
        screening: &Screening,
        customer: &Customer,
        audience_count: i64,
        ticket_fee: Money,
        fee: Money,
    ) -> Self {
        Self {
            id: ReservationId::generate(),
            customer_id: customer.id.clone(),
            screening_id: screening.id.clone(),
            movie_title: screening.movie.title.clone(),
            screening_starts_at: screening.starts_at,
            audience_count,
            ticket_fee,
            fee,
            reserved_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
