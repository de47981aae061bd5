//! Discount policies.

use crate::booking::Screening;
use crate::error::BoxOfficeError;
use crate::money::Money;
use crate::pricing::DiscountCondition;
use serde::{Deserialize, Serialize};

/// The discount strategy a movie applies to its screenings.
///
/// A movie holds exactly one policy at a time. The `Amount` and `Percent`
/// variants OR their conditions together: the discount applies as soon as
/// any one condition matches the screening. With no conditions, nothing
/// ever matches and the full base price is charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum DiscountPolicy {
    /// No discount ever applies.
    #[default]
    None,
    /// Flat amount off when any condition matches.
    Amount {
        amount: Money,
        conditions: Vec<DiscountCondition>,
    },
    /// Percentage of the base price off when any condition matches.
    Percent {
        percent: i64,
        conditions: Vec<DiscountCondition>,
    },
}

impl DiscountPolicy {
    /// Policy that never discounts.
    pub fn none() -> Self {
        DiscountPolicy::None
    }

    /// Flat-amount policy.
    ///
    /// Returns an error if the configured amount is negative.
    pub fn amount(
        amount: Money,
        conditions: Vec<DiscountCondition>,
    ) -> Result<Self, BoxOfficeError> {
        if amount.is_negative() {
            return Err(BoxOfficeError::NegativeDiscountAmount(amount.to_string()));
        }
        Ok(DiscountPolicy::Amount { amount, conditions })
    }

    /// Percentage policy.
    ///
    /// Returns an error if `percent` is outside 0..=100.
    pub fn percent(
        percent: i64,
        conditions: Vec<DiscountCondition>,
    ) -> Result<Self, BoxOfficeError> {
        if !(0..=100).contains(&percent) {
            return Err(BoxOfficeError::PercentOutOfRange(percent));
        }
        Ok(DiscountPolicy::Percent {
            percent,
            conditions,
        })
    }

    /// The conditions gating this policy. Empty for `None`.
    pub fn conditions(&self) -> &[DiscountCondition] {
        match self {
            DiscountPolicy::None => &[],
            DiscountPolicy::Amount { conditions, .. } => conditions,
            DiscountPolicy::Percent { conditions, .. } => conditions,
        }
    }

    /// Whether any condition matches the screening. Short-circuits on the
    /// first match; the result is the same however many conditions match.
    fn is_satisfied_by(&self, screening: &Screening) -> bool {
        self.conditions().iter().any(|c| c.matches(screening))
    }

    /// Calculate the discount for one ticket of the given screening.
    pub fn discount_amount(&self, base_price: Money, screening: &Screening) -> Money {
        match self {
            DiscountPolicy::None => Money::zero(base_price.currency),
            DiscountPolicy::Amount { amount, .. } => {
                if self.is_satisfied_by(screening) {
                    *amount
                } else {
                    Money::zero(base_price.currency)
                }
            }
            DiscountPolicy::Percent { percent, .. } => {
                if self.is_satisfied_by(screening) {
                    base_price.percentage(*percent)
                } else {
                    Money::zero(base_price.currency)
                }
            }
        }
    }

    /// Calculate the per-ticket fee: base price minus discount, floored
    /// at zero. No built-in variant can currently discount past the base
    /// price, but the floor holds for any future one that could.
    ///
    /// # Panics
    /// Panics if a flat discount amount is in a different currency than
    /// the base price.
    pub fn calculate_fee(&self, base_price: Money, screening: &Screening) -> Money {
        let fee = base_price.subtract(&self.discount_amount(base_price, screening));
        if fee.is_negative() {
            Money::zero(base_price.currency)
        } else {
            fee
        }
    }
}
