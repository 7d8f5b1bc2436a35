//! Category Handlers

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use souk_app::domain::catalog::models::Category;

use crate::{errors, extensions::*, state::State};

/// Category response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub(crate) id: i64,

    /// Display name
    pub(crate) name: String,

    /// Icon shown on the storefront home screen
    pub(crate) icon: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.into_i64(),
            name: category.name,
            icon: category.icon,
        }
    }
}

/// Category Index Handler
///
/// Returns every category, in catalog order.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .list_categories()
        .await
        .map_err(errors::catalog)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::catalog::{MockCatalogService, models::CategoryId};
    use testresult::TestResult;

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId::from_i64(id),
            name: name.to_string(),
            icon: "fa-tag".to_string(),
        }
    }

    fn make_service(catalog: MockCatalogService) -> Service {
        MockServices {
            catalog,
            ..MockServices::default()
        }
        .into_service()
    }

    #[tokio::test]
    async fn test_index_returns_a_bare_array_in_catalog_order() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![make_category(1, "Clothes"), make_category(2, "Beauty")]));

        let response: Vec<CategoryResponse> = TestClient::get("http://example.com/api/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2, "expected two categories");
        assert_eq!(response[0].name, "Clothes");
        assert_eq!(response[1].id, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_no_categories_returns_an_empty_array() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let response: Vec<CategoryResponse> = TestClient::get("http://example.com/api/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert!(response.is_empty(), "expected no categories");

        Ok(())
    }
}
