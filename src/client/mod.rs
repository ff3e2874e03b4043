//! # CocktailDB HTTP Client
//!
//! This module provides an async client for the free TheCocktailDB JSON API, organised
//! like a pub:
//!
//! ## Modules
//!
//! - [`client`] - URL construction and the shared HTTP transport
//! - [`catalog`] - [`CatalogBrowser`]: flat inventories of categories, glasses, ingredients, labels
//! - [`item_browser`] - [`ItemBrowser`]: drink summaries filtered by ingredient, type or glass
//! - [`order_desk`] - [`OrderDesk`]: full recipes by name, letter, id or at random
//! - [`ingredients`] - [`IngredientLookup`]: ingredient metadata and the drinks using it
//! - [`types`] - Raw and normalized data shapes
//! - [`error`] - [`CocktailError`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_cocktaildb::client::{CocktailDbClient, ItemBrowser, OrderDesk};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CocktailDbClient::default();
//!
//! let mut shelves = ItemBrowser::new(client.clone());
//! let with_vodka = shelves.filter_by_ingredient("vodka").await?.names()?;
//! println!("{} drinks use vodka", with_vodka.len());
//!
//! let mut desk = OrderDesk::new(client);
//! let drinks = desk.order_by_first_letter('d').await?.names()?;
//! println!("{:?}", drinks);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod ingredients;
pub mod item_browser;
pub mod order_desk;
pub mod types;

pub use catalog::{CatalogBrowser, CatalogKind};
pub use client::{CocktailDbClient, Query, DEFAULT_BASE_URL};
pub use error::CocktailError;
pub use ingredients::{IngredientLookup, KeyType};
pub use item_browser::ItemBrowser;
pub use order_desk::OrderDesk;
pub use types::*;
