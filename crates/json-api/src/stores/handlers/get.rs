//! Get Store Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use souk_app::domain::catalog::models::StoreId;

use crate::{errors, extensions::*, state::State, stores::models::StoreResponse};

/// Get Store Handler
///
/// Returns a single store.
#[endpoint(tags("stores"), summary = "Get Store")]
pub(crate) async fn handler(
    store: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<StoreResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let store = state
        .app
        .catalog
        .get_store(StoreId::from_i64(store.into_inner()))
        .await
        .map_err(errors::catalog)?;

    Ok(Json(store.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::catalog::{CatalogServiceError, MockCatalogService};
    use testresult::TestResult;

    use crate::{errors::ErrorMessage, test_helpers::MockServices};

    use super::{super::tests::make_store, *};

    fn make_service(catalog: MockCatalogService) -> Service {
        MockServices {
            catalog,
            ..MockServices::default()
        }
        .into_service()
    }

    #[tokio::test]
    async fn test_get_returns_the_store() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_store()
            .once()
            .withf(|store| store.into_i64() == 2)
            .return_once(|_| Ok(make_store(2, 0.8)));

        let response: StoreResponse = TestClient::get("http://example.com/api/stores/2")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.id, 2);
        assert_eq!(response.name, "Store 2");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_store_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_store()
            .once()
            .return_once(|_| Err(CatalogServiceError::StoreNotFound));

        let mut res = TestClient::get("http://example.com/api/stores/99")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorMessage = res.take_json().await?;

        assert_eq!(body.message, "Store not found");

        Ok(())
    }
}
