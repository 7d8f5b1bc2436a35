//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use souk_app::domain::orders::models::OrderId;

use crate::{errors, extensions::*, orders::models::OrderDetailsResponse, state::State};

/// Get Order Handler
///
/// Returns a single order joined with its frozen lines and store.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    order: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let details = state
        .app
        .orders
        .get_order(OrderId::from_i64(order.into_inner()))
        .await
        .map_err(errors::orders)?;

    Ok(Json(details.into()))
}
