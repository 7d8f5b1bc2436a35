//! Get Service Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use souk_app::domain::catalog::models::ServiceId;

use crate::{errors, extensions::*, services::models::ServiceResponse, state::State};

/// Get Service Handler
///
/// Returns a single service.
#[endpoint(tags("services"), summary = "Get Service")]
pub(crate) async fn handler(
    service: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ServiceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let service = state
        .app
        .catalog
        .get_service(ServiceId::from_i64(service.into_inner()))
        .await
        .map_err(errors::catalog)?;

    Ok(Json(service.into()))
}
