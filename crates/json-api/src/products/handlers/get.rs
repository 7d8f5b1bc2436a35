//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use souk_app::domain::catalog::models::ProductId;

use crate::{errors, extensions::*, products::models::ProductDetailsResponse, state::State};

/// Get Product Handler
///
/// Returns a single product together with its store.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .get_product(ProductId::from_i64(product.into_inner()))
        .await
        .map_err(errors::catalog)?;

    Ok(Json(product.into()))
}
