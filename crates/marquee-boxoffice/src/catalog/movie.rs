//! Movie catalog entity.

use crate::booking::Screening;
use crate::ids::MovieId;
use crate::money::Money;
use crate::pricing::DiscountPolicy;
use std::sync::RwLock;
use std::time::Duration;

/// A movie in the catalog.
///
/// Each movie owns exactly one discount policy at a time, held in a single
/// replaceable slot. Screenings share the movie (`Arc<Movie>`), so a policy
/// swap is immediately visible to every fee calculated afterwards, while
/// reservations made earlier keep their snapshotted fee.
#[derive(Debug)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: MovieId,
    /// Display title.
    pub title: String,
    /// Running time.
    pub running_time: Duration,
    /// Per-ticket price before any discount.
    pub base_price: Money,
    /// Current discount policy. Swapped whole, never mutated in place.
    policy: RwLock<DiscountPolicy>,
}

impl Movie {
    /// Create a new movie with its initial discount policy.
    pub fn new(
        title: impl Into<String>,
        running_time: Duration,
        base_price: Money,
        policy: DiscountPolicy,
    ) -> Self {
        Self {
            id: MovieId::generate(),
            title: title.into(),
            running_time,
            base_price,
            policy: RwLock::new(policy),
        }
    }

    /// Replace the current discount policy.
    ///
    /// The swap is a single whole-value write: a concurrent fee calculation
    /// observes either the old or the new policy in its entirety.
    pub fn change_discount_policy(&self, policy: DiscountPolicy) {
        tracing::debug!(movie = %self.id, "discount policy replaced");
        *self.policy.write().expect("discount policy lock poisoned") = policy;
    }

    /// Calculate the per-ticket fee for a screening of this movie.
    ///
    /// Always reads the policy current at call time, not one captured at
    /// construction.
    pub fn calculate_movie_fee(&self, screening: &Screening) -> Money {
        let policy = self.policy.read().expect("discount policy lock poisoned");
        policy.calculate_fee(self.base_price, screening)
    }

    /// Snapshot of the current discount policy.
    pub fn discount_policy(&self) -> DiscountPolicy {
        self.policy
            .read()
            .expect("discount policy lock poisoned")
            .clone()
    }
}
