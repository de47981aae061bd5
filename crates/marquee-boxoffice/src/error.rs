//! Box-office error types.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors that can occur in box-office operations.
#[derive(Error, Debug)]
pub enum BoxOfficeError {
    /// Audience count must be at least one.
    #[error("Invalid audience count: {0}")]
    InvalidAudienceCount(i64),

    /// Discount percent outside the 0-100 range.
    #[error("Discount percent out of range (0-100): {0}")]
    PercentOutOfRange(i64),

    /// Discount amount configured as negative.
    #[error("Negative discount amount: {0}")]
    NegativeDiscountAmount(String),

    /// Screening sequence numbers are 1-based.
    #[error("Screening sequence must be positive")]
    InvalidSequence,

    /// Period condition window with start after end.
    #[error("Invalid discount period window: {start} to {end}")]
    InvalidPeriodWindow {
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
