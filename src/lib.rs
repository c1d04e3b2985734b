//! localcart - persistent local storage with a shopping cart
//!
//! An origin-scoped string key-value store that survives restarts, and a
//! cart of product quantities serialized under one reserved key.

pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod store;

pub use error::{LocalcartError, LocalcartResult};
