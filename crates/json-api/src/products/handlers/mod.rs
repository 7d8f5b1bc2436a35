//! Product Handlers

pub(crate) mod get;
pub(crate) mod hot_deals;
pub(crate) mod index;
pub(crate) mod negotiate;

#[cfg(test)]
mod tests {
    use souk_app::domain::catalog::models::{CategoryId, Product, ProductId, StoreId};

    pub(super) fn make_product(id: i64, final_price: u64) -> Product {
        Product {
            id: ProductId::from_i64(id),
            store_id: StoreId::from_i64(1),
            category_id: Some(CategoryId::from_i64(1)),
            name: format!("Product {id}"),
            description: "A negotiable catalog product".to_string(),
            original_price: final_price + 400,
            discount_percentage: 20,
            final_price,
            min_acceptable_price: None,
            stock: 10,
            rating: 4.2,
            review_count: 80,
            image_url: "https://images.example.com/product.jpg".to_string(),
        }
    }
}
