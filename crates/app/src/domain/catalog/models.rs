//! Catalog Models

use std::{fmt, str::FromStr};

use souk::negotiation::SellerTerms;
use thiserror::Error;

use crate::ids::{TypedId, UserId};

/// Category id
pub type CategoryId = TypedId<Category>;

/// Product category shown on the storefront home screen.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
}

/// Store id
pub type StoreId = TypedId<Store>;

/// A retailer's physical store.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: StoreId,
    /// The retailer who runs the store.
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub rating: f64,
    pub review_count: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Distance from the delivery area, in kilometres.
    pub distance: f64,
    /// Typical delivery time, in minutes.
    pub delivery_time: u32,
    pub image_url: String,
}

/// New Store Model
#[derive(Debug, Clone)]
pub struct NewStore {
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub rating: f64,
    pub review_count: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
    pub delivery_time: u32,
    pub image_url: String,
}

/// Product id
pub type ProductId = TypedId<Product>;

/// A negotiable catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    /// Unit list price before discount, in rupees.
    pub original_price: u64,
    /// Advertised discount off the list price, in whole percent.
    pub discount_percentage: u32,
    /// Unit display price after discount, in rupees.
    pub final_price: u64,
    /// Seller's negotiation floor, in rupees. Without one the floor falls
    /// back to 80% of `final_price`.
    pub min_acceptable_price: Option<u64>,
    pub stock: u32,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
}

impl Product {
    /// Negotiation inputs for this product.
    #[must_use]
    pub fn seller_terms(&self) -> SellerTerms {
        SellerTerms {
            final_price: self.final_price,
            min_acceptable_price: self.min_acceptable_price,
        }
    }
}

/// New Product Model
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub store_id: StoreId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub original_price: u64,
    pub discount_percentage: u32,
    pub final_price: u64,
    pub min_acceptable_price: Option<u64>,
    pub stock: u32,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
}

/// Service id
pub type ServiceId = TypedId<Service>;

/// Kind of bookable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Beauty,
    Tailoring,
}

impl ServiceType {
    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beauty => "beauty",
            Self::Tailoring => "tailoring",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beauty" => Ok(Self::Beauty),
            "tailoring" => Ok(Self::Tailoring),
            other => Err(UnknownServiceType(other.to_string())),
        }
    }
}

/// A service kind string the catalog does not know.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

/// A flat-price bookable service. Services are never negotiated.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ServiceId,
    pub store_id: StoreId,
    pub name: String,
    pub description: String,
    pub service_type: ServiceType,
    /// Flat price, in rupees.
    pub price: u64,
    /// Appointment length, in minutes.
    pub duration: u32,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
}

/// New Service Model
#[derive(Debug, Clone)]
pub struct NewService {
    pub store_id: StoreId,
    pub name: String,
    pub description: String,
    pub service_type: ServiceType,
    pub price: u64,
    pub duration: u32,
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
}

/// Product joined with its owning store for display.
#[derive(Debug, Clone)]
pub struct ProductWithStore {
    pub product: Product,
    pub store: Store,
}

/// Service joined with its owning store for display.
#[derive(Debug, Clone)]
pub struct ServiceWithStore {
    pub service: Service,
    pub store: Store,
}

/// Which products a catalog listing should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Keep only products in this category.
    pub category: Option<CategoryId>,
    /// Keep only products sold by this store.
    pub store: Option<StoreId>,
}
