//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use souk::money;

use crate::{
    domain::{
        carts::{
            MemCartItemsRepository, MemCartsRepository,
            errors::CartsServiceError,
            models::{Cart, CartItem, CartItemId, CartItemView, CartView, LineRef, NewCartItem},
        },
        catalog::MemCatalogRepository,
    },
    ids::UserId,
    storage::{Storage, Tables},
};

/// Carts over the shared in-memory [`Storage`].
#[derive(Debug, Clone)]
pub struct MemCartsService {
    storage: Storage,
    carts_repository: MemCartsRepository,
    items_repository: MemCartItemsRepository,
    catalog_repository: MemCatalogRepository,
}

impl MemCartsService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            carts_repository: MemCartsRepository::new(),
            items_repository: MemCartItemsRepository::new(),
            catalog_repository: MemCatalogRepository::new(),
        }
    }

    fn build_view(&self, tables: &Tables, cart: &Cart) -> CartView {
        let items: Vec<CartItemView> = self
            .items_repository
            .list_for_cart(tables, cart.id)
            .into_iter()
            .map(|item| CartItemView {
                product: item
                    .line
                    .product_id()
                    .and_then(|id| self.catalog_repository.product_with_store(tables, id)),
                service: item
                    .line
                    .service_id()
                    .and_then(|id| self.catalog_repository.service_with_store(tables, id)),
                item,
            })
            .collect();

        let total_amount = money::cart_total(items.iter().map(CartItemView::pricing));

        CartView {
            id: cart.id,
            user: cart.user,
            items,
            total_amount,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }

    fn check_line_exists(&self, tables: &Tables, line: LineRef) -> Result<(), CartsServiceError> {
        match line {
            LineRef::Product(id) => {
                if self.catalog_repository.get_product(tables, id).is_none() {
                    return Err(CartsServiceError::ProductNotFound);
                }
            }
            LineRef::Service(id) => {
                if self.catalog_repository.get_service(tables, id).is_none() {
                    return Err(CartsServiceError::ServiceNotFound);
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl CartsService for MemCartsService {
    async fn get_cart(&self, user: UserId) -> Result<CartView, CartsServiceError> {
        // A write guard because first use creates the cart.
        let mut tables = self.storage.write().await;

        let cart = self.carts_repository.find_or_create(&mut tables, user);

        Ok(self.build_view(&tables, &cart))
    }

    async fn add_item(
        &self,
        user: UserId,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tables = self.storage.write().await;

        self.check_line_exists(&tables, item.line)?;

        let cart = self.carts_repository.find_or_create(&mut tables, user);

        let saved = match self.items_repository.find_line(&tables, cart.id, item.line) {
            Some(mut existing) => {
                existing.quantity += item.quantity;

                // Last write wins; an absent price keeps the old deal.
                if let Some(price) = item.negotiated_price {
                    existing.negotiated_price = Some(price);
                }

                self.items_repository.save(&mut tables, existing)
            }
            None => self.items_repository.insert(&mut tables, cart.id, item),
        };

        self.carts_repository.touch(&mut tables, cart.id);

        Ok(saved)
    }

    async fn update_item_quantity(
        &self,
        item: CartItemId,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tables = self.storage.write().await;

        let mut existing = self
            .items_repository
            .get(&tables, item)
            .ok_or(CartsServiceError::ItemNotFound)?;

        existing.quantity = quantity;

        let saved = self.items_repository.save(&mut tables, existing);

        self.carts_repository.touch(&mut tables, saved.cart_id);

        Ok(saved)
    }

    async fn remove_item(&self, item: CartItemId) -> Result<(), CartsServiceError> {
        let mut tables = self.storage.write().await;

        // Removing an id that is already gone is not an error.
        if let Some(existing) = self.items_repository.get(&tables, item) {
            self.items_repository.remove(&mut tables, item);
            self.carts_repository.touch(&mut tables, existing.cart_id);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's cart joined with catalog data, created on first use.
    async fn get_cart(&self, user: UserId) -> Result<CartView, CartsServiceError>;

    /// Add a line to the user's cart. Re-adding the same product or service
    /// merges into the existing line: quantities add up and a newly supplied
    /// negotiated price replaces the old one.
    async fn add_item(
        &self,
        user: UserId,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError>;

    /// Replace a line's quantity.
    async fn update_item_quantity(
        &self,
        item: CartItemId,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError>;

    /// Remove a line. Removing an id that is already gone succeeds quietly.
    async fn remove_item(&self, item: CartItemId) -> Result<(), CartsServiceError>;
}
