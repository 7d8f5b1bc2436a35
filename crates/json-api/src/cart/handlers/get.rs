//! Cart Retrieval Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::models::CartResponse, errors, extensions::*, state::State};

/// Cart Retrieval Handler
///
/// Returns the current user's cart joined with its catalog rows. The cart is
/// created on first touch, so this never answers 404.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_500()?;

    let cart = state.app.carts.get_cart(user).await.map_err(errors::carts)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use souk_app::{
        UserId,
        domain::{
            carts::{
                MockCartsService,
                models::{CartId, CartItem, CartItemId, CartItemView, CartView, LineRef},
            },
            catalog::models::{
                CategoryId, Product, ProductId, ProductWithStore, Service as CatalogService,
                ServiceId, ServiceType, ServiceWithStore, Store, StoreId,
            },
        },
    };
    use testresult::TestResult;

    use crate::{identity::USER_ID_HEADER, test_helpers::MockServices};

    use super::{super::tests::make_product_item, *};

    fn make_service(carts: MockCartsService) -> Service {
        MockServices {
            carts,
            ..MockServices::default()
        }
        .into_service()
    }

    fn make_store(id: i64) -> Store {
        Store {
            id: StoreId::from_i64(id),
            owner: UserId::from_i64(2),
            name: format!("Store {id}"),
            description: "A neighbourhood store".to_string(),
            address: "12 MG Road".to_string(),
            rating: 4.5,
            review_count: 120,
            latitude: 18.52,
            longitude: 73.85,
            distance: 0.8,
            delivery_time: 30,
            image_url: "https://example.com/store.jpg".to_string(),
        }
    }

    fn make_product(id: i64) -> Product {
        Product {
            id: ProductId::from_i64(id),
            store_id: StoreId::from_i64(1),
            category_id: Some(CategoryId::from_i64(1)),
            name: format!("Product {id}"),
            description: "A fine product".to_string(),
            original_price: 1999,
            discount_percentage: 20,
            final_price: 1599,
            min_acceptable_price: None,
            stock: 10,
            rating: 4.2,
            review_count: 80,
            image_url: "https://example.com/product.jpg".to_string(),
        }
    }

    fn make_beauty_service(id: i64) -> CatalogService {
        CatalogService {
            id: ServiceId::from_i64(id),
            store_id: StoreId::from_i64(2),
            name: format!("Service {id}"),
            description: "A pampering session".to_string(),
            service_type: ServiceType::Beauty,
            price: 499,
            duration: 60,
            rating: 4.7,
            review_count: 150,
            image_url: "https://example.com/service.jpg".to_string(),
        }
    }

    fn make_cart_view(user: i64, items: Vec<CartItemView>, total_amount: u64) -> CartView {
        CartView {
            id: CartId::from_i64(1),
            user: UserId::from_i64(user),
            items,
            total_amount,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_get_returns_the_joined_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        let mut negotiated = make_product_item(10, 8, 2);
        negotiated.negotiated_price = Some(1299);

        let service_line = CartItem {
            id: CartItemId::from_i64(11),
            cart_id: CartId::from_i64(1),
            line: LineRef::Service(ServiceId::from_i64(3)),
            quantity: 1,
            negotiated_price: None,
        };

        let items = vec![
            CartItemView {
                item: negotiated,
                product: Some(ProductWithStore {
                    product: make_product(8),
                    store: make_store(1),
                }),
                service: None,
            },
            CartItemView {
                item: service_line,
                product: None,
                service: Some(ServiceWithStore {
                    service: make_beauty_service(3),
                    store: make_store(2),
                }),
            },
        ];

        carts
            .expect_get_cart()
            .once()
            .withf(|user| user.into_i64() == 1)
            .return_once(move |_| Ok(make_cart_view(1, items, 3097)));

        let body: serde_json::Value = TestClient::get("http://example.com/api/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert_eq!(body.get("id"), Some(&serde_json::json!(1)));
        assert_eq!(body.get("userId"), Some(&serde_json::json!(1)));
        assert_eq!(body.get("totalAmount"), Some(&serde_json::json!(3097)));

        let items = body
            .get("items")
            .and_then(serde_json::Value::as_array)
            .ok_or("items is not an array")?;

        assert_eq!(items.len(), 2);

        assert_eq!(items[0].get("productId"), Some(&serde_json::json!(8)));
        assert_eq!(items[0].get("negotiatedPrice"), Some(&serde_json::json!(1299)));
        assert_eq!(
            items[0].pointer("/product/store/name"),
            Some(&serde_json::json!("Store 1"))
        );

        assert_eq!(items[1].get("serviceId"), Some(&serde_json::json!(3)));
        assert_eq!(items[1].get("productId"), None, "service lines carry no productId");
        assert_eq!(items[1].get("negotiatedPrice"), None);
        assert_eq!(
            items[1].pointer("/service/type"),
            Some(&serde_json::json!("beauty"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_acts_as_the_header_identity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| user.into_i64() == 7)
            .return_once(|_| Ok(make_cart_view(7, vec![], 0)));

        let body: serde_json::Value = TestClient::get("http://example.com/api/cart")
            .add_header(USER_ID_HEADER, "7", true)
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert_eq!(body.get("userId"), Some(&serde_json::json!(7)));
        assert_eq!(body.get("items"), Some(&serde_json::json!([])));

        Ok(())
    }
}
