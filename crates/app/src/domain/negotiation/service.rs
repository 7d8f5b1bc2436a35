//! Negotiation service.

use async_trait::async_trait;
use mockall::automock;
use souk::negotiation::{self, OfferOutcome};

use crate::{
    domain::{
        catalog::{MemCatalogRepository, models::ProductId},
        negotiation::errors::NegotiationServiceError,
    },
    storage::Storage,
};

/// Negotiation over products in the shared in-memory [`Storage`].
///
/// Stateless by design: each offer is resolved against the product's current
/// terms and nothing about the exchange is recorded. A buyer holds on to an
/// accepted price by writing it onto a cart line.
#[derive(Debug, Clone)]
pub struct MemNegotiationService {
    storage: Storage,
    catalog: MemCatalogRepository,
}

impl MemNegotiationService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            catalog: MemCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl NegotiationService for MemNegotiationService {
    async fn negotiate(
        &self,
        product: ProductId,
        offer_price: u64,
    ) -> Result<OfferOutcome, NegotiationServiceError> {
        // Worthless offers are rejected before the product is even looked up.
        negotiation::validate_offer(offer_price)?;

        let tables = self.storage.read().await;

        let product = self
            .catalog
            .get_product(&tables, product)
            .ok_or(NegotiationServiceError::ProductNotFound)?;

        let outcome = negotiation::resolve_offer(product.seller_terms(), offer_price)?;

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait NegotiationService: Send + Sync {
    /// Resolve a buyer's unit-price offer for a product.
    async fn negotiate(
        &self,
        product: ProductId,
        offer_price: u64,
    ) -> Result<OfferOutcome, NegotiationServiceError>;
}
