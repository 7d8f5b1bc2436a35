//! Retailer Handlers

pub(crate) mod orders;
pub(crate) mod products;
pub(crate) mod update_status;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use souk_app::{
        UserId,
        domain::{
            catalog::models::{CategoryId, Product, ProductId, StoreId},
            orders::{
                OrderStatus,
                models::{Order, OrderId, PaymentMethod},
            },
        },
    };

    pub(super) fn make_order(id: i64, store: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from_i64(id),
            user: UserId::from_i64(1),
            store_id: StoreId::from_i64(store),
            status,
            total_amount: 1299,
            delivery_fee: 49,
            tax_amount: 29,
            discount_amount: 0,
            payment_method: PaymentMethod::Cod,
            delivery_address: "12 MG Road".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            estimated_delivery_time: Timestamp::UNIX_EPOCH,
        }
    }

    pub(super) fn make_product(id: i64, store: i64) -> Product {
        Product {
            id: ProductId::from_i64(id),
            store_id: StoreId::from_i64(store),
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
}
