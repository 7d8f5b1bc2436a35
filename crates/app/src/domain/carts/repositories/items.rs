//! Cart Items Repository

use crate::{
    domain::carts::models::{CartId, CartItem, CartItemId, LineRef, NewCartItem},
    storage::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemCartItemsRepository;

impl MemCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Lines in the cart, oldest first.
    pub(crate) fn list_for_cart(&self, tables: &Tables, cart: CartId) -> Vec<CartItem> {
        tables
            .cart_items
            .rows()
            .filter(|item| item.cart_id == cart)
            .cloned()
            .collect()
    }

    /// The line in `cart` selling the same thing, if any. Matching ignores
    /// the negotiated price; re-adding merges, it never forks a line.
    pub(crate) fn find_line(&self, tables: &Tables, cart: CartId, line: LineRef) -> Option<CartItem> {
        tables
            .cart_items
            .rows()
            .find(|item| item.cart_id == cart && item.line == line)
            .cloned()
    }

    pub(crate) fn get(&self, tables: &Tables, item: CartItemId) -> Option<CartItem> {
        tables.cart_items.get(item).cloned()
    }

    pub(crate) fn insert(&self, tables: &mut Tables, cart: CartId, item: NewCartItem) -> CartItem {
        let id = tables.cart_items.allocate_id();

        let item = CartItem {
            id,
            cart_id: cart,
            line: item.line,
            quantity: item.quantity,
            negotiated_price: item.negotiated_price,
        };

        tables.cart_items.insert(id, item.clone());

        item
    }

    /// Overwrite an existing line.
    pub(crate) fn save(&self, tables: &mut Tables, item: CartItem) -> CartItem {
        tables.cart_items.insert(item.id, item.clone());

        item
    }

    pub(crate) fn remove(&self, tables: &mut Tables, item: CartItemId) -> bool {
        tables.cart_items.remove(item).is_some()
    }

    /// Remove every line in the cart, returning how many went.
    pub(crate) fn clear_cart(&self, tables: &mut Tables, cart: CartId) -> usize {
        let ids: Vec<_> = tables
            .cart_items
            .rows()
            .filter(|item| item.cart_id == cart)
            .map(|item| item.id)
            .collect();

        for id in &ids {
            tables.cart_items.remove(*id);
        }

        ids.len()
    }
}
