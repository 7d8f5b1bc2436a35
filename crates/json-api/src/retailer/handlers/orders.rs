//! Retailer Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors, extensions::*, orders::models::OrderResponse, state::State};

/// Retailer Order Index Handler
///
/// Returns the orders placed with the store the request acts for, newest
/// first.
#[endpoint(tags("retailer"), summary = "List Store Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let store = depot.store_id_or_500()?;

    let orders = state
        .app
        .orders
        .store_orders(store)
        .await
        .map_err(errors::orders)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::orders::{MockOrdersService, OrderStatus};
    use testresult::TestResult;

    use crate::{identity::STORE_ID_HEADER, test_helpers::MockServices};

    use super::{super::tests::make_order, *};

    fn make_service(orders: MockOrdersService) -> Service {
        MockServices {
            orders,
            ..MockServices::default()
        }
        .into_service()
    }

    #[tokio::test]
    async fn test_orders_act_as_the_header_identity() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_store_orders()
            .once()
            .withf(|store| store.into_i64() == 3)
            .return_once(|_| {
                Ok(vec![
                    make_order(6, 3, OrderStatus::Pending),
                    make_order(5, 3, OrderStatus::Delivered),
                ])
            });

        let response: Vec<OrderResponse> =
            TestClient::get("http://example.com/api/retailer/orders")
                .add_header(STORE_ID_HEADER, "3", true)
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        let ids: Vec<i64> = response.iter().map(|order| order.id).collect();

        assert_eq!(ids, vec![6, 5]);
        assert_eq!(response[0].status, "pending");
        assert_eq!(response[1].status, "delivered");

        Ok(())
    }
}
