//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::carts::models::CartItemId;

use crate::{errors, extensions::*, state::State};

/// Removal acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuccessResponse {
    /// Always true; removal of an already absent line still succeeds
    pub(crate) success: bool,
}

/// Remove Cart Item Handler
///
/// Deletes a cart line.
#[endpoint(tags("cart"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .remove_item(CartItemId::from_i64(item.into_inner()))
        .await
        .map_err(errors::carts)?;

    Ok(Json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::carts::MockCartsService;
    use testresult::TestResult;

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        MockServices {
            carts,
            ..MockServices::default()
        }
        .into_service()
    }

    #[tokio::test]
    async fn test_remove_succeeds_even_when_repeated() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .times(2)
            .withf(|item| item.into_i64() == 5)
            .returning(|_| Ok(()));

        let service = make_service(carts);

        for _attempt in 0..2 {
            let response: SuccessResponse = TestClient::delete("http://example.com/api/cart/items/5")
                .send(&service)
                .await
                .take_json()
                .await?;

            assert!(response.success);
        }

        Ok(())
    }
}
