//! Hot Deals Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors, extensions::*, products::models::ProductResponse, state::State};

/// Hot Deals Handler
///
/// Returns the steepest discounts, steepest first, capped at four.
#[endpoint(tags("products"), summary = "List Hot Deals")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .catalog
        .hot_deals()
        .await
        .map_err(errors::catalog)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::catalog::MockCatalogService;
    use testresult::TestResult;

    use crate::test_helpers::MockServices;

    use super::{super::tests::make_product, *};

    fn make_service(catalog: MockCatalogService) -> Service {
        MockServices {
            catalog,
            ..MockServices::default()
        }
        .into_service()
    }

    #[tokio::test]
    async fn test_hot_deals_preserve_the_service_ordering() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_hot_deals()
            .once()
            .return_once(|| Ok(vec![make_product(4, 799), make_product(2, 1299)]));

        let response: Vec<ProductResponse> =
            TestClient::get("http://example.com/api/products/hot-deals")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        let ids: Vec<i64> = response.iter().map(|product| product.id).collect();

        assert_eq!(ids, vec![4, 2], "expected steepest-first ordering");

        Ok(())
    }
}
