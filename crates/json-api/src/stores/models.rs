//! Store wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use souk_app::domain::catalog::models::Store;

/// Store response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreResponse {
    /// The unique identifier of the store
    pub(crate) id: i64,

    /// The retailer who runs the store
    pub(crate) user_id: i64,

    /// Display name
    pub(crate) name: String,

    /// Short blurb shown on store cards
    pub(crate) description: String,

    /// Street address
    pub(crate) address: String,

    /// Average review rating
    pub(crate) rating: f64,

    /// Number of reviews behind the rating
    pub(crate) review_count: u32,

    /// Latitude of the storefront
    pub(crate) latitude: f64,

    /// Longitude of the storefront
    pub(crate) longitude: f64,

    /// Distance from the delivery area, in kilometres
    pub(crate) distance: f64,

    /// Typical delivery time, in minutes
    pub(crate) delivery_time: u32,

    /// Image shown on store cards
    pub(crate) image_url: String,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        StoreResponse {
            id: store.id.into_i64(),
            user_id: store.owner.into_i64(),
            name: store.name,
            description: store.description,
            address: store.address,
            rating: store.rating,
            review_count: store.review_count,
            latitude: store.latitude,
            longitude: store.longitude,
            distance: store.distance,
            delivery_time: store.delivery_time,
            image_url: store.image_url,
        }
    }
}
