//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::orders::{OrderStatus, models::OrderId};

use crate::{errors, extensions::*, orders::models::OrderResponse, state::State};

/// Update order status request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    /// The lifecycle stage to move the order to
    pub(crate) status: Option<String>,
}

/// Update Order Status Handler
///
/// Moves an order forward through its lifecycle. Stages may be skipped, but
/// the order never moves backwards.
#[endpoint(tags("retailer"), summary = "Update Order Status")]
pub(crate) async fn handler(
    order: PathParam<i64>,
    body: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(raw) = body.into_inner().status else {
        return Err(StatusError::bad_request().brief("Status is required"));
    };

    let status = raw
        .parse::<OrderStatus>()
        .map_err(|_invalid| StatusError::bad_request().brief("Invalid status value"))?;

    let order = state
        .app
        .orders
        .update_status(OrderId::from_i64(order.into_inner()), status)
        .await
        .map_err(errors::orders)?;

    Ok(Json(order.into()))
}
