//! Negotiation

pub mod errors;
pub mod service;

pub use errors::NegotiationServiceError;
pub use service::*;

pub use souk::negotiation::{OfferError, OfferOutcome, SellerTerms};
