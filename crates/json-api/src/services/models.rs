//! Service wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use souk_app::domain::catalog::models::{Service, ServiceWithStore};

use crate::stores::models::StoreResponse;

/// Service response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServiceResponse {
    /// The unique identifier of the service
    pub(crate) id: i64,

    /// The store offering the service
    pub(crate) store_id: i64,

    /// Display name
    pub(crate) name: String,

    /// Full description
    pub(crate) description: String,

    /// Kind of service, `beauty` or `tailoring`
    #[serde(rename = "type")]
    pub(crate) service_type: String,

    /// Flat price, in rupees
    pub(crate) price: u64,

    /// Appointment length, in minutes
    pub(crate) duration: u32,

    /// Average review rating
    pub(crate) rating: f64,

    /// Number of reviews behind the rating
    pub(crate) review_count: u32,

    /// Image shown on service cards
    pub(crate) image_url: String,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        ServiceResponse {
            id: service.id.into_i64(),
            store_id: service.store_id.into_i64(),
            name: service.name,
            description: service.description,
            service_type: service.service_type.to_string(),
            price: service.price,
            duration: service.duration,
            rating: service.rating,
            review_count: service.review_count,
            image_url: service.image_url,
        }
    }
}

/// Service with its store, for cart lines.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceWithStoreResponse {
    /// The service fields, flattened to the top level
    #[serde(flatten)]
    pub(crate) service: ServiceResponse,

    /// The store offering the service
    pub(crate) store: StoreResponse,
}

impl From<ServiceWithStore> for ServiceWithStoreResponse {
    fn from(with_store: ServiceWithStore) -> Self {
        ServiceWithStoreResponse {
            service: with_store.service.into(),
            store: with_store.store.into(),
        }
    }
}
