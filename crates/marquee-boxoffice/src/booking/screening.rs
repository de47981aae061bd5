//! Screening schedule and the reservation entry point.

use crate::booking::{Customer, Reservation};
use crate::catalog::Movie;
use crate::error::BoxOfficeError;
use crate::ids::ScreeningId;
use crate::money::Money;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// One scheduled screening of a movie.
///
/// Identified by its 1-based sequence number among all screenings of the
/// movie, plus its start time. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Screening {
    /// Unique screening identifier.
    pub id: ScreeningId,
    /// The movie being screened. Shared with every other screening of it.
    pub movie: Arc<Movie>,
    /// 1-based ordinal among the movie's screenings.
    pub sequence: u32,
    /// Scheduled start.
    pub starts_at: NaiveDateTime,
}

impl Screening {
    /// Create a new screening.
    ///
    /// Returns an error if `sequence` is zero.
    pub fn new(
        movie: Arc<Movie>,
        sequence: u32,
        starts_at: NaiveDateTime,
    ) -> Result<Self, BoxOfficeError> {
        if sequence == 0 {
            return Err(BoxOfficeError::InvalidSequence);
        }
        Ok(Self {
            id: ScreeningId::generate(),
            movie,
            sequence,
            starts_at,
        })
    }

    /// Per-ticket fee for this screening under the movie's current policy.
    pub fn calculate_fee(&self) -> Money {
        self.movie.calculate_movie_fee(self)
    }

    /// Reserve seats for this screening.
    ///
    /// The per-ticket fee is computed once, here, and snapshotted into the
    /// reservation; a later policy change on the movie does not affect it.
    ///
    /// Returns an error if `audience_count` is not positive, or if the
    /// total would overflow.
    pub fn reserve(
        &self,
        customer: &Customer,
        audience_count: i64,
    ) -> Result<Reservation, BoxOfficeError> {
        if audience_count <= 0 {
            return Err(BoxOfficeError::InvalidAudienceCount(audience_count));
        }

        let ticket_fee = self.calculate_fee();
        let fee = ticket_fee
            .try_multiply(audience_count)
            .ok_or(BoxOfficeError::Overflow)?;

        tracing::debug!(
            screening = %self.id,
            customer = %customer.id,
            audience_count,
            fee = %fee,
            "reservation created"
        );

        Ok(Reservation::new(self, customer, audience_count, ticket_fee, fee))
    }
}
