//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::catalog::{
        MemCatalogRepository,
        errors::CatalogServiceError,
        models::{
            Category, Product, ProductFilter, ProductId, ProductWithStore, Service, ServiceId,
            ServiceType, ServiceWithStore, Store, StoreId,
        },
    },
    storage::Storage,
};

/// How many stores the storefront's "nearby" rail shows.
const NEARBY_STORES_LIMIT: usize = 5;

/// How many products the storefront's "hot deals" rail shows.
const HOT_DEALS_LIMIT: usize = 4;

/// Catalog queries backed by the shared in-memory [`Storage`].
#[derive(Debug, Clone)]
pub struct MemCatalogService {
    storage: Storage,
    repository: MemCatalogRepository,
}

impl MemCatalogService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            repository: MemCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for MemCatalogService {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.list_categories(&tables))
    }

    async fn list_stores(&self) -> Result<Vec<Store>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.list_stores(&tables))
    }

    async fn nearby_stores(&self) -> Result<Vec<Store>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.nearby_stores(&tables, NEARBY_STORES_LIMIT))
    }

    async fn get_store(&self, store: StoreId) -> Result<Store, CatalogServiceError> {
        let tables = self.storage.read().await;

        self.repository
            .get_store(&tables, store)
            .ok_or(CatalogServiceError::StoreNotFound)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.list_products(&tables, filter))
    }

    async fn hot_deals(&self) -> Result<Vec<Product>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.hot_deals(&tables, HOT_DEALS_LIMIT))
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<ProductWithStore, CatalogServiceError> {
        let tables = self.storage.read().await;

        let product = self
            .repository
            .get_product(&tables, product)
            .ok_or(CatalogServiceError::ProductNotFound)?;

        let store = self
            .repository
            .get_store(&tables, product.store_id)
            .ok_or(CatalogServiceError::StoreNotFound)?;

        Ok(ProductWithStore { product, store })
    }

    async fn list_services(
        &self,
        kind: Option<ServiceType>,
    ) -> Result<Vec<Service>, CatalogServiceError> {
        let tables = self.storage.read().await;

        Ok(self.repository.list_services(&tables, kind))
    }

    async fn get_service(&self, service: ServiceId) -> Result<Service, CatalogServiceError> {
        let tables = self.storage.read().await;

        self.repository
            .get_service(&tables, service)
            .ok_or(CatalogServiceError::ServiceNotFound)
    }

    async fn get_service_with_store(
        &self,
        service: ServiceId,
    ) -> Result<ServiceWithStore, CatalogServiceError> {
        let tables = self.storage.read().await;

        let service = self
            .repository
            .get_service(&tables, service)
            .ok_or(CatalogServiceError::ServiceNotFound)?;

        let store = self
            .repository
            .get_store(&tables, service.store_id)
            .ok_or(CatalogServiceError::StoreNotFound)?;

        Ok(ServiceWithStore { service, store })
    }

    async fn store_products(&self, store: StoreId) -> Result<Vec<Product>, CatalogServiceError> {
        let tables = self.storage.read().await;

        if self.repository.get_store(&tables, store).is_none() {
            return Err(CatalogServiceError::StoreNotFound);
        }

        Ok(self.repository.list_products(
            &tables,
            ProductFilter {
                category: None,
                store: Some(store),
            },
        ))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All categories, in catalog order.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// All stores, in catalog order.
    async fn list_stores(&self) -> Result<Vec<Store>, CatalogServiceError>;

    /// The closest stores, nearest first, capped at five.
    async fn nearby_stores(&self) -> Result<Vec<Store>, CatalogServiceError>;

    /// Retrieve a single store.
    async fn get_store(&self, store: StoreId) -> Result<Store, CatalogServiceError>;

    /// Products matching the filter, in catalog order.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// The steepest discounts, steepest first, capped at four.
    async fn hot_deals(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product together with its store.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<ProductWithStore, CatalogServiceError>;

    /// Services, optionally narrowed to one kind, in catalog order.
    async fn list_services(
        &self,
        kind: Option<ServiceType>,
    ) -> Result<Vec<Service>, CatalogServiceError>;

    /// Retrieve a single service.
    async fn get_service(&self, service: ServiceId) -> Result<Service, CatalogServiceError>;

    /// Retrieve a single service together with its store.
    async fn get_service_with_store(
        &self,
        service: ServiceId,
    ) -> Result<ServiceWithStore, CatalogServiceError>;

    /// Products sold by one store, in catalog order.
    async fn store_products(&self, store: StoreId) -> Result<Vec<Product>, CatalogServiceError>;
}
