//! Cart operations on top of a key-value store

use crate::cart::state::{display_line, Cart};
use crate::error::LocalcartResult;
use crate::render::RenderSink;
use crate::store::{get_json, set_json, KeyValueStore};
use tracing::{debug, info};

/// Store key holding the serialized cart
pub const CART_KEY: &str = "cart";

/// Reads and writes the cart kept under [`CART_KEY`].
///
/// Every write replaces the whole serialized cart; there are no partial
/// updates.
pub struct CartManager<S> {
    store: S,
}

impl<S: KeyValueStore> CartManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Current cart; an absent or empty value is an empty cart.
    ///
    /// Malformed stored data is returned as an error, never replaced.
    pub fn read_cart(&self) -> LocalcartResult<Cart> {
        if self.store.get(CART_KEY).is_some_and(|raw| raw.is_empty()) {
            return Ok(Cart::new());
        }
        Ok(get_json::<Cart, _>(&self.store, CART_KEY)?.unwrap_or_default())
    }

    /// Record `quantity` for `name` and write the cart back.
    ///
    /// Returns the quantity that was replaced, if the product was already
    /// in the cart.
    pub fn set_item(&mut self, name: &str, quantity: &str) -> LocalcartResult<Option<String>> {
        let mut cart = self.read_cart()?;
        let previous = cart.set(name, quantity);
        set_json(&mut self.store, CART_KEY, &cart)?;

        match &previous {
            Some(old) => info!("Replaced {} quantity {} with {}", name, old, quantity),
            None => info!("Added {} x{} to cart", name, quantity),
        }
        debug!("Cart now holds {} products", cart.len());
        Ok(previous)
    }

    /// Add a product to the cart and render its line.
    ///
    /// The line is rendered only once the cart has been stored.
    pub fn add_to_cart<R>(
        &mut self,
        name: &str,
        quantity: &str,
        sink: &mut R,
    ) -> LocalcartResult<Option<String>>
    where
        R: RenderSink + ?Sized,
    {
        let previous = self.set_item(name, quantity)?;
        sink.append_line(&display_line(name, quantity));
        Ok(previous)
    }

    /// Render every cart entry in iteration order; returns the line count.
    pub fn render_all<R>(&self, sink: &mut R) -> LocalcartResult<usize>
    where
        R: RenderSink + ?Sized,
    {
        let cart = self.read_cart()?;
        for line in cart.lines() {
            sink.append_line(&line);
        }
        Ok(cart.len())
    }
}
