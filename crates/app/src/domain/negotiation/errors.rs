//! Negotiation service errors.

use souk::negotiation::OfferError;
use thiserror::Error;

/// Failures resolving a price offer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationServiceError {
    /// The offer is not a chargeable amount.
    #[error(transparent)]
    InvalidOffer(#[from] OfferError),

    /// No product with the requested id.
    #[error("product not found")]
    ProductNotFound,
}
