//! Discount eligibility conditions.

use crate::booking::Screening;
use crate::error::BoxOfficeError;
use chrono::{Datelike, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A predicate deciding whether a screening is eligible for a discount.
///
/// Conditions are pure: they only inspect the screening's stored schedule,
/// never the wall clock. A policy holds zero or more conditions and ORs
/// them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountCondition {
    /// Matches the Nth screening of the movie.
    Sequence(u32),
    /// Matches screenings starting inside a weekly time window.
    Period {
        /// Day of week the window applies to.
        day_of_week: Weekday,
        /// Window start time, inclusive.
        start: NaiveTime,
        /// Window end time, inclusive. A screening starting exactly at
        /// this time still matches.
        end: NaiveTime,
    },
}

impl DiscountCondition {
    /// Condition on the screening's ordinal sequence number.
    pub fn sequence(sequence: u32) -> Self {
        DiscountCondition::Sequence(sequence)
    }

    /// Condition on a weekly time window, inclusive on both ends.
    ///
    /// Returns an error if `start` is after `end`.
    pub fn period(
        day_of_week: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, BoxOfficeError> {
        if start > end {
            return Err(BoxOfficeError::InvalidPeriodWindow { start, end });
        }
        Ok(DiscountCondition::Period {
            day_of_week,
            start,
            end,
        })
    }

    /// Check whether the screening satisfies this condition.
    pub fn matches(&self, screening: &Screening) -> bool {
        match self {
            DiscountCondition::Sequence(sequence) => screening.sequence == *sequence,
            DiscountCondition::Period {
                day_of_week,
                start,
                end,
            } => {
                screening.starts_at.weekday() == *day_of_week
                    && (*start..=*end).contains(&screening.starts_at.time())
            }
        }
    }
}
