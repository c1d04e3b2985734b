//! Shopping cart kept in a key-value store

pub mod manager;
pub mod state;

pub use manager::{CartManager, CART_KEY};
pub use state::{display_line, Cart};
