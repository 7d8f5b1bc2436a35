//! Retailer Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors, extensions::*, products::models::ProductResponse, state::State};

/// Retailer Product Index Handler
///
/// Returns the products of the store the request acts for.
#[endpoint(tags("retailer"), summary = "List Store Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let store = depot.store_id_or_500()?;

    let products = state
        .app
        .catalog
        .store_products(store)
        .await
        .map_err(errors::catalog)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
