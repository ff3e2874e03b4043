//! # CocktailDB MCP Library
//!
//! This library wraps TheCocktailDB, a free recipe/ingredient lookup API, and exposes it
//! through the Model Context Protocol (MCP). It consists of two main components:
//!
//! ## Client Module
//!
//! The [`client`] module provides the HTTP client and four façades over the API:
//! inventories ([`CatalogBrowser`]), filtered shelves ([`ItemBrowser`]), the bar
//! ([`OrderDesk`]) and ingredient details ([`IngredientLookup`]).
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes those façades
//! as tools that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_cocktaildb::{CocktailDbClient, CocktailMcpServer, OrderDesk};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Use the client directly
//! let client = CocktailDbClient::default();
//! let mut desk = OrderDesk::new(client.clone());
//! let margarita = desk.order_by_name("margarita").await?.details()?;
//!
//! // Or create an MCP server
//! let server = CocktailMcpServer::new(client);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod server;

pub use client::{
    CatalogBrowser, CocktailDbClient, CocktailError, IngredientLookup, ItemBrowser, OrderDesk,
};
pub use server::CocktailMcpServer;
