//! Wire contracts of the shop analytics API consumed by the d404 dashboard.

pub mod dto;

pub use dto::*;
