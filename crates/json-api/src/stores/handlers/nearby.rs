//! Nearby Stores Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors, extensions::*, state::State, stores::models::StoreResponse};

/// Nearby Stores Handler
///
/// Returns the closest stores, nearest first, capped at five.
#[endpoint(tags("stores"), summary = "List Nearby Stores")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<StoreResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stores = state
        .app
        .catalog
        .nearby_stores()
        .await
        .map_err(errors::catalog)?;

    Ok(Json(stores.into_iter().map(Into::into).collect()))
}
