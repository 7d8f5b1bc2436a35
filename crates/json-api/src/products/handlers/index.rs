//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use souk_app::domain::catalog::models::{CategoryId, ProductFilter, StoreId};

use crate::{errors, extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns products, optionally narrowed by the `categoryId` and `storeId`
/// query filters.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // A zero or unparseable id means no filter.
    let filter = ProductFilter {
        category: req
            .query::<i64>("categoryId")
            .filter(|id| *id != 0)
            .map(CategoryId::from_i64),
        store: req
            .query::<i64>("storeId")
            .filter(|id| *id != 0)
            .map(StoreId::from_i64),
    };

    let products = state
        .app
        .catalog
        .list_products(filter)
        .await
        .map_err(errors::catalog)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
