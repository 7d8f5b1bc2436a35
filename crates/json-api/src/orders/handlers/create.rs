//! Create Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::{
    catalog::models::StoreId,
    orders::models::{NewOrder, PaymentMethod},
};

use crate::{errors, extensions::*, orders::models::OrderResponse, state::State};

/// Create order request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    /// The store the order is placed with
    pub(crate) store_id: Option<i64>,

    /// How the buyer pays; defaults to cash on delivery
    pub(crate) payment_method: Option<String>,

    /// Where to deliver
    pub(crate) delivery_address: Option<String>,
}

/// Create Order Handler
///
/// Places an order from everything in the current user's cart. The cart is
/// emptied on success.
#[endpoint(tags("orders"), summary = "Create Order")]
pub(crate) async fn handler(
    body: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_500()?;

    let request = body.into_inner();

    // A zero store id means the side is unused.
    let (Some(store_id), Some(delivery_address)) = (
        request.store_id.filter(|id| *id != 0),
        request.delivery_address.filter(|address| !address.is_empty()),
    ) else {
        return Err(StatusError::bad_request().brief("Store ID and delivery address are required"));
    };

    let payment_method = match request.payment_method {
        None => PaymentMethod::default(),
        Some(raw) => raw
            .parse::<PaymentMethod>()
            .map_err(|_invalid| StatusError::bad_request().brief("Invalid payment method"))?,
    };

    let order = NewOrder {
        store_id: StoreId::from_i64(store_id),
        payment_method,
        delivery_address,
    };

    let order = state
        .app
        .orders
        .create_from_cart(user, order)
        .await
        .map_err(errors::orders)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::domain::orders::{MockOrdersService, OrdersServiceError};
    use testresult::TestResult;

    use crate::{errors::ErrorMessage, test_helpers::MockServices};

    use super::{super::tests::make_order, *};

    fn make_service(orders: MockOrdersService) -> Service {
        MockServices {
            orders,
            ..MockServices::default()
        }
        .into_service()
    }

    async fn post(body: &serde_json::Value, orders: MockOrdersService) -> Response {
        TestClient::post("http://example.com/api/orders")
            .json(body)
            .send(&make_service(orders))
            .await
    }

    #[tokio::test]
    async fn test_create_places_the_order_from_the_cart() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .withf(|user, order| {
                user.into_i64() == 1
                    && order.store_id.into_i64() == 1
                    && order.payment_method == PaymentMethod::Cod
                    && order.delivery_address == "12 MG Road"
            })
            .return_once(|_, _| Ok(make_order(5, 1, 1)));

        let mut res = post(
            &serde_json::json!({ "storeId": 1, "deliveryAddress": "12 MG Road" }),
            orders,
        )
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.id, 5);
        assert_eq!(body.status, "confirmed");
        assert_eq!(body.delivery_fee, 49);
        assert_eq!(body.tax_amount, 29);
        assert_eq!(body.discount_amount, 0);
        assert_eq!(body.payment_method, "cod");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_carries_the_chosen_payment_method() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .withf(|_user, order| order.payment_method == PaymentMethod::Gpay)
            .return_once(|_, _| {
                let mut order = make_order(5, 1, 1);
                order.payment_method = PaymentMethod::Gpay;

                Ok(order)
            });

        let body: OrderResponse = post(
            &serde_json::json!({
                "storeId": 1,
                "deliveryAddress": "12 MG Road",
                "paymentMethod": "gpay",
            }),
            orders,
        )
        .await
        .take_json()
        .await?;

        assert_eq!(body.payment_method, "gpay");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_requires_a_store_and_an_address() -> TestResult {
        let bodies = [
            serde_json::json!({}),
            serde_json::json!({ "storeId": 1 }),
            serde_json::json!({ "deliveryAddress": "12 MG Road" }),
            serde_json::json!({ "storeId": 0, "deliveryAddress": "12 MG Road" }),
            serde_json::json!({ "storeId": 1, "deliveryAddress": "" }),
        ];

        for body in bodies {
            let mut res = post(&body, MockOrdersService::new()).await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

            let body: ErrorMessage = res.take_json().await?;

            assert_eq!(body.message, "Store ID and delivery address are required");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_an_unknown_payment_method() -> TestResult {
        let mut res = post(
            &serde_json::json!({
                "storeId": 1,
                "deliveryAddress": "12 MG Road",
                "paymentMethod": "bitcoin",
            }),
            MockOrdersService::new(),
        )
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorMessage = res.take_json().await?;

        assert_eq!(body.message, "Invalid payment method");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_an_empty_cart_is_rejected() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::EmptyCart));

        let mut res = post(
            &serde_json::json!({ "storeId": 1, "deliveryAddress": "12 MG Road" }),
            orders,
        )
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorMessage = res.take_json().await?;

        assert_eq!(body.message, "Cart is empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_against_an_unknown_store_is_a_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_from_cart()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::StoreNotFound));

        let mut res = post(
            &serde_json::json!({ "storeId": 99, "deliveryAddress": "12 MG Road" }),
            orders,
        )
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorMessage = res.take_json().await?;

        assert_eq!(body.message, "Store not found");

        Ok(())
    }
}
