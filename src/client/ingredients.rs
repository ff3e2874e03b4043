//! Ingredient metadata, and the drinks that use an ingredient.
//!
//! [`IngredientLookup::recipes_using`] reuses the key of the previous
//! [`IngredientLookup::lookup`], which only works when that key was a name:
//!
//! ```no_run
//! use mcp_cocktaildb::client::{CocktailDbClient, IngredientLookup, KeyType};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut vodka = IngredientLookup::new(CocktailDbClient::default());
//! vodka.lookup("vodka", KeyType::Name).await?;
//! println!("{:?}", vodka.record()?);
//! let recipes = vodka.recipes_using().await?;
//! println!("{} drinks use vodka", recipes.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::client::{
    catalog::CatalogBrowser,
    client::{CocktailDbClient, Query},
    error::{CocktailError, Result},
    types::{DrinkSummary, IngredientRecord, Matches},
};

/// How an ingredient lookup key is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Name,
    Id,
}

impl FromStr for KeyType {
    type Err = CocktailError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(KeyType::Name),
            "id" => Ok(KeyType::Id),
            other => Err(CocktailError::contract(format!(
                "unsupported ingredient key type '{}', only 'name' and 'id' are supported",
                other
            ))),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Name => f.write_str("name"),
            KeyType::Id => f.write_str("id"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngredientLookup {
    client: CocktailDbClient,
    found: Option<Matches<IngredientRecord>>,
    key: Option<(String, KeyType)>,
}

impl IngredientLookup {
    pub fn new(client: CocktailDbClient) -> Self {
        Self {
            client,
            found: None,
            key: None,
        }
    }

    pub async fn lookup(&mut self, key: &str, key_type: KeyType) -> Result<&mut Self> {
        let query = match key_type {
            KeyType::Name => Query::IngredientByName(key),
            KeyType::Id => Query::IngredientById(key),
        };
        let ingredients = self.client.fetch_ingredients(query).await?;
        tracing::debug!(
            "Ingredient lookup by {} '{}' returned {} records",
            key_type,
            key,
            ingredients.len()
        );
        self.found = Some(Matches::from_vec(ingredients));
        self.key = Some((key.to_string(), key_type));
        Ok(self)
    }

    /// Like [`lookup`](Self::lookup) with the key type given as `"name"` or `"id"`.
    pub async fn lookup_by(&mut self, key: &str, key_type: &str) -> Result<&mut Self> {
        let key_type: KeyType = key_type.parse()?;
        self.lookup(key, key_type).await
    }

    /// Metadata from the last successful lookup.
    pub fn record(&self) -> Result<&Matches<IngredientRecord>> {
        self.found
            .as_ref()
            .ok_or_else(|| CocktailError::contract("no ingredient has been looked up yet"))
    }

    pub fn key(&self) -> Option<(&str, KeyType)> {
        self.key.as_ref().map(|(key, key_type)| (key.as_str(), *key_type))
    }

    /// Drinks using the ingredient from the last lookup, which must have been by name.
    pub async fn recipes_using(&self) -> Result<Vec<DrinkSummary>> {
        let name = match &self.key {
            Some((name, KeyType::Name)) => name,
            Some((_, KeyType::Id)) => {
                return Err(CocktailError::contract(
                    "recipes can only be listed after looking an ingredient up by name",
                ))
            }
            None => {
                return Err(CocktailError::contract(
                    "look an ingredient up by name before listing its recipes",
                ))
            }
        };
        self.client
            .fetch_drinks(Query::FilterByIngredient(name))
            .await
    }

    /// Primary name of every ingredient the service knows.
    pub async fn all_ingredient_names(&self) -> Result<Vec<String>> {
        CatalogBrowser::new(self.client.clone())
            .ingredient_names()
            .await
    }
}
