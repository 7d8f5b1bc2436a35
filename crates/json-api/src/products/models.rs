//! Product wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use souk_app::domain::catalog::models::{Product, ProductWithStore};

use crate::stores::models::StoreResponse;

/// Product response
///
/// Mirrors the catalog row, `minAcceptablePrice` included; the storefront
/// client reads it to seed the negotiation widget.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub(crate) id: i64,

    /// The store selling the product
    pub(crate) store_id: i64,

    /// The category the product is listed under
    pub(crate) category_id: Option<i64>,

    /// Display name
    pub(crate) name: String,

    /// Full description
    pub(crate) description: String,

    /// Unit list price before discount, in rupees
    pub(crate) original_price: u64,

    /// Advertised discount off the list price, in whole percent
    pub(crate) discount_percentage: u32,

    /// Unit display price after discount, in rupees
    pub(crate) final_price: u64,

    /// Seller's negotiation floor, in rupees
    pub(crate) min_acceptable_price: Option<u64>,

    /// Units in stock
    pub(crate) stock: u32,

    /// Average review rating
    pub(crate) rating: f64,

    /// Number of reviews behind the rating
    pub(crate) review_count: u32,

    /// Image shown on product cards
    pub(crate) image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            store_id: product.store_id.into_i64(),
            category_id: product.category_id.map(Into::into),
            name: product.name,
            description: product.description,
            original_price: product.original_price,
            discount_percentage: product.discount_percentage,
            final_price: product.final_price,
            min_acceptable_price: product.min_acceptable_price,
            stock: product.stock,
            rating: product.rating,
            review_count: product.review_count,
            image_url: product.image_url,
        }
    }
}

/// Product with its store, for the product detail screen.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsResponse {
    /// The product fields, flattened to the top level
    #[serde(flatten)]
    pub(crate) product: ProductResponse,

    /// The store selling the product
    pub(crate) store: StoreResponse,
}

impl From<ProductWithStore> for ProductDetailsResponse {
    fn from(with_store: ProductWithStore) -> Self {
        ProductDetailsResponse {
            product: with_store.product.into(),
            store: with_store.store.into(),
        }
    }
}
