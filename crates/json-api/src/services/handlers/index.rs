//! Service Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use souk_app::domain::catalog::models::ServiceType;

use crate::{errors, extensions::*, services::models::ServiceResponse, state::State};

/// Service Index Handler
///
/// Returns services, optionally narrowed to one kind by the `type` query
/// filter.
#[endpoint(tags("services"), summary = "List Services")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ServiceResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let kind = match req.query::<String>("type") {
        None => None,
        Some(raw) => Some(
            raw.parse::<ServiceType>()
                .map_err(|_invalid| StatusError::bad_request().brief("Invalid service type"))?,
        ),
    };

    let services = state
        .app
        .catalog
        .list_services(kind)
        .await
        .map_err(errors::catalog)?;

    Ok(Json(services.into_iter().map(Into::into).collect()))
}
