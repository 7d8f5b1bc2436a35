//! Souk application services over shared in-memory storage.

pub mod context;
pub mod domain;
pub mod seed;
pub mod storage;

#[cfg(test)]
mod test;

mod ids;

pub use ids::{TypedId, User, UserId};
