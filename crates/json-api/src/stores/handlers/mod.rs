//! Store Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod nearby;

#[cfg(test)]
mod tests {
    use souk_app::{
        UserId,
        domain::catalog::models::{Store, StoreId},
    };

    pub(super) fn make_store(id: i64, distance: f64) -> Store {
        Store {
            id: StoreId::from_i64(id),
            owner: UserId::from_i64(2),
            name: format!("Store {id}"),
            description: "Neighbourhood store".to_string(),
            address: "12 MG Road, Pune".to_string(),
            rating: 4.5,
            review_count: 120,
            latitude: 18.52,
            longitude: 73.85,
            distance,
            delivery_time: 30,
            image_url: "https://images.example.com/store.jpg".to_string(),
        }
    }
}
