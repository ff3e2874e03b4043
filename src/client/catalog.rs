//! Inventory lists: every category, glass, ingredient and alcoholic label the service knows.

use std::str::FromStr;

use crate::client::{
    client::{CocktailDbClient, Query},
    error::{CocktailError, Result},
    types::CatalogEntry,
};

/// Which inventory list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Categories,
    Glasses,
    Ingredients,
    Alcoholic,
}

impl CatalogKind {
    fn query(self) -> Query<'static> {
        match self {
            CatalogKind::Categories => Query::ListCategories,
            CatalogKind::Glasses => Query::ListGlasses,
            CatalogKind::Ingredients => Query::ListIngredients,
            CatalogKind::Alcoholic => Query::ListAlcoholic,
        }
    }

    /// The one field of a list entry this kind populates.
    fn pick(self, entry: CatalogEntry) -> Option<String> {
        match self {
            CatalogKind::Categories => entry.category,
            CatalogKind::Glasses => entry.glass,
            CatalogKind::Ingredients => entry.ingredient,
            CatalogKind::Alcoholic => entry.alcoholic,
        }
    }
}

impl FromStr for CatalogKind {
    type Err = CocktailError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "categories" | "category" | "c" => Ok(CatalogKind::Categories),
            "glasses" | "glass" | "containers" | "container" | "g" => Ok(CatalogKind::Glasses),
            "ingredients" | "ingredient" | "i" => Ok(CatalogKind::Ingredients),
            "alcoholic" | "types" | "a" => Ok(CatalogKind::Alcoholic),
            other => Err(CocktailError::contract(format!(
                "unknown catalog '{}', expected categories, glasses, ingredients or alcoholic",
                other
            ))),
        }
    }
}

/// Read-only inventory queries. Nothing is stored between calls.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    client: CocktailDbClient,
}

impl CatalogBrowser {
    pub fn new(client: CocktailDbClient) -> Self {
        Self { client }
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        self.list(CatalogKind::Categories).await
    }

    pub async fn container_types(&self) -> Result<Vec<String>> {
        self.list(CatalogKind::Glasses).await
    }

    pub async fn ingredient_names(&self) -> Result<Vec<String>> {
        self.list(CatalogKind::Ingredients).await
    }

    /// Alcoholic classification labels; entries with a null label are dropped.
    pub async fn classification_labels(&self) -> Result<Vec<String>> {
        self.list(CatalogKind::Alcoholic).await
    }

    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<String>> {
        let entries: Vec<CatalogEntry> = self.client.fetch_drinks(kind.query()).await?;
        let names: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| kind.pick(entry))
            .collect();
        tracing::debug!("Catalog {:?} holds {} entries", kind, names.len());
        Ok(names)
    }
}
