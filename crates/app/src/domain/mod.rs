//! Souk Domain Concerns

pub mod carts;
pub mod catalog;
pub mod negotiation;
pub mod orders;
