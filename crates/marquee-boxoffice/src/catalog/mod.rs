//! Movie catalog module.

mod movie;

pub use movie::Movie;
