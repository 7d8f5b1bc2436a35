//! Catalog Repository

use crate::{
    domain::catalog::models::{
        Category, NewCategory, NewProduct, NewService, NewStore, Product, ProductFilter,
        ProductId, ProductWithStore, Service, ServiceId, ServiceType, ServiceWithStore, Store,
        StoreId,
    },
    storage::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemCatalogRepository;

impl MemCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_categories(&self, tables: &Tables) -> Vec<Category> {
        tables.categories.rows().cloned().collect()
    }

    pub(crate) fn create_category(&self, tables: &mut Tables, category: NewCategory) -> Category {
        let id = tables.categories.allocate_id();

        let category = Category {
            id,
            name: category.name,
            icon: category.icon,
        };

        tables.categories.insert(id, category.clone());

        category
    }

    pub(crate) fn list_stores(&self, tables: &Tables) -> Vec<Store> {
        tables.stores.rows().cloned().collect()
    }

    /// The closest stores, nearest first. Ties keep insertion order.
    pub(crate) fn nearby_stores(&self, tables: &Tables, limit: usize) -> Vec<Store> {
        let mut stores = self.list_stores(tables);

        // Stable sort, so equally distant stores keep their catalog order.
        stores.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        stores.truncate(limit);

        stores
    }

    pub(crate) fn get_store(&self, tables: &Tables, store: StoreId) -> Option<Store> {
        tables.stores.get(store).cloned()
    }

    pub(crate) fn create_store(&self, tables: &mut Tables, store: NewStore) -> Store {
        let id = tables.stores.allocate_id();

        let store = Store {
            id,
            owner: store.owner,
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
        };

        tables.stores.insert(id, store.clone());

        store
    }

    pub(crate) fn list_products(&self, tables: &Tables, filter: ProductFilter) -> Vec<Product> {
        tables
            .products
            .rows()
            .filter(|product| {
                filter
                    .category
                    .is_none_or(|category| product.category_id == Some(category))
            })
            .filter(|product| filter.store.is_none_or(|store| product.store_id == store))
            .cloned()
            .collect()
    }

    /// The steepest discounts, steepest first. Ties keep insertion order.
    pub(crate) fn hot_deals(&self, tables: &Tables, limit: usize) -> Vec<Product> {
        let mut products: Vec<_> = tables.products.rows().cloned().collect();

        // Stable sort, so equal discounts keep their catalog order.
        products.sort_by(|a, b| b.discount_percentage.cmp(&a.discount_percentage));
        products.truncate(limit);

        products
    }

    pub(crate) fn get_product(&self, tables: &Tables, product: ProductId) -> Option<Product> {
        tables.products.get(product).cloned()
    }

    pub(crate) fn product_with_store(
        &self,
        tables: &Tables,
        product: ProductId,
    ) -> Option<ProductWithStore> {
        let product = self.get_product(tables, product)?;
        let store = self.get_store(tables, product.store_id)?;

        Some(ProductWithStore { product, store })
    }

    pub(crate) fn create_product(&self, tables: &mut Tables, product: NewProduct) -> Product {
        let id = tables.products.allocate_id();

        let product = Product {
            id,
            store_id: product.store_id,
            category_id: product.category_id,
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
        };

        tables.products.insert(id, product.clone());

        product
    }

    pub(crate) fn list_services(
        &self,
        tables: &Tables,
        kind: Option<ServiceType>,
    ) -> Vec<Service> {
        tables
            .services
            .rows()
            .filter(|service| kind.is_none_or(|kind| service.service_type == kind))
            .cloned()
            .collect()
    }

    pub(crate) fn get_service(&self, tables: &Tables, service: ServiceId) -> Option<Service> {
        tables.services.get(service).cloned()
    }

    pub(crate) fn service_with_store(
        &self,
        tables: &Tables,
        service: ServiceId,
    ) -> Option<ServiceWithStore> {
        let service = self.get_service(tables, service)?;
        let store = self.get_store(tables, service.store_id)?;

        Some(ServiceWithStore { service, store })
    }

    pub(crate) fn create_service(&self, tables: &mut Tables, service: NewService) -> Service {
        let id = tables.services.allocate_id();

        let service = Service {
            id,
            store_id: service.store_id,
            name: service.name,
            description: service.description,
            service_type: service.service_type,
            price: service.price,
            duration: service.duration,
            rating: service.rating,
            review_count: service.review_count,
            image_url: service.image_url,
        };

        tables.services.insert(id, service.clone());

        service
    }
}
