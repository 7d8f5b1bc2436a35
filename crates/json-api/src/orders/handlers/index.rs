//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors, extensions::*, orders::models::OrderResponse, state::State};

/// Order Index Handler
///
/// Returns the current user's orders, newest first.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_500()?;

    let orders = state
        .app
        .orders
        .user_orders(user)
        .await
        .map_err(errors::orders)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
