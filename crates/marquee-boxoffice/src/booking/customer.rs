//! Customer identity.

use crate::ids::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer making reservations.
///
/// The pricing core treats customers as opaque: nothing about the person
/// influences the fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
}

impl Customer {
    /// Create a customer with a generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::generate(),
            name: name.into(),
        }
    }

    /// Create a customer with a known ID.
    pub fn with_id(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
