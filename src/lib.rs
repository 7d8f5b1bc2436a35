//! Souk
//!
//! Souk is the pure commerce rulebook for a local-market storefront: single-round
//! price negotiation, cart and order money maths, and the order delivery lifecycle.
//! Everything in this crate is synchronous and side-effect free; storage and HTTP
//! concerns live in the application crates built on top of it.

pub mod lifecycle;
pub mod money;
pub mod negotiation;
