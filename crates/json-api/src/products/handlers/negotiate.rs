//! Negotiate Price Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::{catalog::models::ProductId, negotiation::OfferOutcome};

use crate::{errors, extensions::*, state::State};

/// Negotiate request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NegotiateRequest {
    /// The buyer's unit-price offer, in rupees
    pub(crate) offer_price: Option<i64>,
}

/// Negotiate response.
///
/// `counterOffer` only appears when the offer fell short.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NegotiateResponse {
    /// Whether the seller accepted the offer
    pub(crate) accepted: bool,

    /// The lowest unit price the seller will take, when countering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) counter_offer: Option<u64>,

    /// The unit price the deal would close at, in rupees
    pub(crate) final_price: u64,
}

impl From<OfferOutcome> for NegotiateResponse {
    fn from(outcome: OfferOutcome) -> Self {
        match outcome {
            OfferOutcome::Accepted { unit_price } => NegotiateResponse {
                accepted: true,
                counter_offer: None,
                final_price: unit_price,
            },
            OfferOutcome::Countered { counter_offer } => NegotiateResponse {
                accepted: false,
                counter_offer: Some(counter_offer),
                final_price: counter_offer,
            },
        }
    }
}

/// Negotiate Price Handler
///
/// Resolves a buyer's offer for a product against the seller's terms.
#[endpoint(tags("products"), summary = "Negotiate Price")]
pub(crate) async fn handler(
    product: PathParam<i64>,
    body: JsonBody<NegotiateRequest>,
    depot: &mut Depot,
) -> Result<Json<NegotiateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(offer_price) = body
        .into_inner()
        .offer_price
        .and_then(|offer| u64::try_from(offer).ok())
    else {
        return Err(StatusError::bad_request().brief("Valid offer price is required"));
    };

    let outcome = state
        .app
        .negotiation
        .negotiate(ProductId::from_i64(product.into_inner()), offer_price)
        .await
        .map_err(errors::negotiation)?;

    Ok(Json(outcome.into()))
}
