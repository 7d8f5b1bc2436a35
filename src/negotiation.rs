//! Price Negotiation
//!
//! A buyer offers a unit price for a product and the seller holds a floor, the
//! lowest unit price they will take. Offers at or above the floor are accepted
//! at the buyer's own number; offers below it are countered with the floor
//! itself. Accepting a counter is expressed by re-offering the floor, so any
//! negotiation settles in at most two rounds.

use thiserror::Error;

/// Pricing inputs a seller brings to a negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellerTerms {
    /// Display price after discount, in rupees. Charged when no deal is struck.
    pub final_price: u64,

    /// Explicit negotiation floor, if the seller set one.
    pub min_acceptable_price: Option<u64>,
}

impl SellerTerms {
    /// The lowest unit price the seller accepts. Without an explicit floor this
    /// falls back to 80% of the display price, rounded down to a whole rupee.
    #[must_use]
    pub fn floor(&self) -> u64 {
        self.min_acceptable_price
            .unwrap_or(self.final_price * 4 / 5)
    }
}

/// Outcome of resolving one offer against a seller's terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    /// The offer met the floor. The buyer pays exactly what they offered,
    /// even when that is above the display price.
    Accepted {
        /// Unit price the buyer will be charged.
        unit_price: u64,
    },

    /// The offer fell short. The seller counters with the floor.
    Countered {
        /// Lowest unit price the seller will take.
        counter_offer: u64,
    },
}

/// Offers that cannot be priced at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OfferError {
    /// An offer has to be a positive amount of money.
    #[error("offer price must be a positive amount")]
    NotPositive,
}

/// Check that an offer is a chargeable amount.
///
/// # Errors
///
/// Returns [`OfferError::NotPositive`] for a zero offer.
pub fn validate_offer(offer: u64) -> Result<(), OfferError> {
    if offer == 0 {
        return Err(OfferError::NotPositive);
    }

    Ok(())
}

/// Resolve a single offer against the seller's terms.
///
/// # Errors
///
/// Returns [`OfferError::NotPositive`] for a zero offer.
pub fn resolve_offer(terms: SellerTerms, offer: u64) -> Result<OfferOutcome, OfferError> {
    validate_offer(offer)?;

    let floor = terms.floor();

    if offer >= floor {
        Ok(OfferOutcome::Accepted { unit_price: offer })
    } else {
        Ok(OfferOutcome::Countered {
            counter_offer: floor,
        })
    }
}
