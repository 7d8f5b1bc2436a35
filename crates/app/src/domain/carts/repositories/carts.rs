//! Carts Repository

use jiff::Timestamp;

use crate::{
    domain::carts::models::{Cart, CartId},
    ids::UserId,
    storage::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemCartsRepository;

impl MemCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn find_for_user(&self, tables: &Tables, user: UserId) -> Option<Cart> {
        tables.carts.rows().find(|cart| cart.user == user).cloned()
    }

    pub(crate) fn create(&self, tables: &mut Tables, user: UserId) -> Cart {
        let id = tables.carts.allocate_id();
        let now = Timestamp::now();

        let cart = Cart {
            id,
            user,
            created_at: now,
            updated_at: now,
        };

        tables.carts.insert(id, cart.clone());

        cart
    }

    /// The user's cart, created on first use.
    pub(crate) fn find_or_create(&self, tables: &mut Tables, user: UserId) -> Cart {
        match self.find_for_user(tables, user) {
            Some(cart) => cart,
            None => self.create(tables, user),
        }
    }

    pub(crate) fn get(&self, tables: &Tables, cart: CartId) -> Option<Cart> {
        tables.carts.get(cart).cloned()
    }

    pub(crate) fn touch(&self, tables: &mut Tables, cart: CartId) {
        if let Some(cart) = tables.carts.get_mut(cart) {
            cart.updated_at = Timestamp::now();
        }
    }
}
