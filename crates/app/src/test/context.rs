//! Test context for service-level integration tests.

use testresult::TestResult;

use crate::{
    domain::{
        carts::{
            CartsService, MemCartsService,
            models::{LineRef, NewCartItem},
        },
        catalog::{
            MemCatalogRepository, MemCatalogService,
            models::{
                Category, CategoryId, NewCategory, NewProduct, NewService, NewStore, Product,
                ProductId, Service, ServiceType, Store, StoreId,
            },
        },
        negotiation::MemNegotiationService,
        orders::{
            MemOrdersService, OrdersService,
            models::{NewOrder, Order, PaymentMethod},
        },
    },
    ids::UserId,
    storage::Storage,
};

/// Every service wired over one fresh in-memory [`Storage`].
pub struct TestContext {
    pub storage: Storage,
    pub catalog: MemCatalogService,
    pub negotiation: MemNegotiationService,
    pub carts: MemCartsService,
    pub orders: MemOrdersService,
    repository: MemCatalogRepository,
}

impl TestContext {
    pub fn new() -> Self {
        let storage = Storage::new();

        Self {
            catalog: MemCatalogService::new(storage.clone()),
            negotiation: MemNegotiationService::new(storage.clone()),
            carts: MemCartsService::new(storage.clone()),
            orders: MemOrdersService::new(storage.clone()),
            repository: MemCatalogRepository::new(),
            storage,
        }
    }

    pub async fn add_category(&self, name: &str) -> Category {
        let mut tables = self.storage.write().await;

        self.repository.create_category(
            &mut tables,
            NewCategory {
                name: name.to_string(),
                icon: "🛍️".to_string(),
            },
        )
    }

    /// A store whose only distinguishing feature is how far away it is.
    pub async fn add_store_at_distance(&self, distance: f64) -> Store {
        let mut tables = self.storage.write().await;

        self.repository.create_store(
            &mut tables,
            NewStore {
                owner: UserId::from_i64(2),
                name: format!("Store at {distance} km"),
                description: "A neighbourhood store".to_string(),
                address: "MG Road, Pune".to_string(),
                rating: 4.5,
                review_count: 120,
                latitude: 18.52,
                longitude: 73.85,
                distance,
                delivery_time: 30,
                image_url: "https://example.com/store.jpg".to_string(),
            },
        )
    }

    /// A product selling at `final_price` after a flat 400 markdown.
    pub async fn add_product_in(
        &self,
        store: StoreId,
        category: Option<CategoryId>,
        final_price: u64,
        min_acceptable_price: Option<u64>,
    ) -> Product {
        self.insert_product(NewProduct {
            store_id: store,
            category_id: category,
            name: "Test Product".to_string(),
            description: "A product for tests".to_string(),
            original_price: final_price + 400,
            discount_percentage: 20,
            final_price,
            min_acceptable_price,
            stock: 10,
            rating: 4.3,
            review_count: 57,
            image_url: "https://example.com/product.jpg".to_string(),
        })
        .await
    }

    /// A product with the list and selling prices spelled out.
    pub async fn add_priced_product_in(
        &self,
        store: StoreId,
        original_price: u64,
        final_price: u64,
        min_acceptable_price: Option<u64>,
    ) -> Product {
        self.insert_product(NewProduct {
            store_id: store,
            category_id: None,
            name: "Test Product".to_string(),
            description: "A product for tests".to_string(),
            original_price,
            discount_percentage: discount_off(original_price, final_price),
            final_price,
            min_acceptable_price,
            stock: 10,
            rating: 4.3,
            review_count: 57,
            image_url: "https://example.com/product.jpg".to_string(),
        })
        .await
    }

    /// A 1000-rupee product marked down by `discount_percentage`.
    pub async fn add_discounted_product(
        &self,
        store: StoreId,
        discount_percentage: u32,
    ) -> Product {
        let original_price = 1000;
        let final_price = original_price - u64::from(discount_percentage) * 10;

        self.insert_product(NewProduct {
            store_id: store,
            category_id: None,
            name: format!("{discount_percentage}% off"),
            description: "A discounted product".to_string(),
            original_price,
            discount_percentage,
            final_price,
            min_acceptable_price: None,
            stock: 10,
            rating: 4.3,
            review_count: 57,
            image_url: "https://example.com/product.jpg".to_string(),
        })
        .await
    }

    pub async fn add_service_in(&self, store: StoreId, kind: ServiceType, price: u64) -> Service {
        let mut tables = self.storage.write().await;

        let name = match kind {
            ServiceType::Beauty => "Classic Facial",
            ServiceType::Tailoring => "Blouse Stitching",
        };

        self.repository.create_service(
            &mut tables,
            NewService {
                store_id: store,
                name: name.to_string(),
                description: "A service for tests".to_string(),
                service_type: kind,
                price,
                duration: 60,
                rating: 4.6,
                review_count: 85,
                image_url: "https://example.com/service.jpg".to_string(),
            },
        )
    }

    /// Rewrite a product's prices in place, as a seller edit would.
    pub async fn reprice_product(&self, product: ProductId, final_price: u64) {
        let mut tables = self.storage.write().await;

        if let Some(row) = tables.products.get_mut(product) {
            row.original_price = final_price;
            row.final_price = final_price;
        }
    }

    /// Run one product straight through checkout, for lifecycle tests.
    pub async fn place_order(&self, user: UserId) -> TestResult<Order> {
        let store = self.add_store_at_distance(0.4).await;
        let product = self.add_product_in(store.id, None, 1599, None).await;

        self.carts
            .add_item(
                user,
                NewCartItem {
                    line: LineRef::Product(product.id),
                    quantity: 1,
                    negotiated_price: None,
                },
            )
            .await?;

        let order = self
            .orders
            .create_from_cart(
                user,
                NewOrder {
                    store_id: store.id,
                    payment_method: PaymentMethod::Cod,
                    delivery_address: "42 Gandhi Road, Pune".to_string(),
                },
            )
            .await?;

        Ok(order)
    }

    async fn insert_product(&self, product: NewProduct) -> Product {
        let mut tables = self.storage.write().await;

        self.repository.create_product(&mut tables, product)
    }
}

fn discount_off(original_price: u64, final_price: u64) -> u32 {
    let cut = original_price.saturating_sub(final_price) * 100 / original_price.max(1);

    u32::try_from(cut).unwrap_or(0)
}
