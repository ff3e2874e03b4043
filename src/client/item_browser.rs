//! The shelves: drink summaries filtered by ingredient, type, or glass.

use crate::client::{
    client::{CocktailDbClient, Query},
    error::{CocktailError, Result},
    types::DrinkSummary,
};

#[derive(Debug, Clone)]
pub struct ItemBrowser {
    client: CocktailDbClient,
    drinks: Option<Vec<DrinkSummary>>,
}

impl ItemBrowser {
    pub fn new(client: CocktailDbClient) -> Self {
        Self {
            client,
            drinks: None,
        }
    }

    pub async fn filter_by_ingredient(&mut self, name: &str) -> Result<&mut Self> {
        self.filter(Query::FilterByIngredient(name)).await
    }

    /// Filters by alcoholic classification or by category, see [`type_filter`].
    pub async fn filter_by_type(&mut self, label: &str) -> Result<&mut Self> {
        self.filter(type_filter(label)).await
    }

    pub async fn filter_by_container(&mut self, name: &str) -> Result<&mut Self> {
        self.filter(Query::FilterByGlass(name)).await
    }

    async fn filter(&mut self, query: Query<'_>) -> Result<&mut Self> {
        let drinks: Vec<DrinkSummary> = self.client.fetch_drinks(query).await?;
        tracing::debug!("Filter {:?} returned {} drinks", query, drinks.len());
        self.drinks = Some(drinks);
        Ok(self)
    }

    pub fn summaries(&self) -> Result<&[DrinkSummary]> {
        self.drinks
            .as_deref()
            .ok_or_else(|| CocktailError::contract("no filter has been applied yet"))
    }

    /// Drink names from the last filter. Always a list, even for a single match.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .summaries()?
            .iter()
            .map(|drink| drink.name.clone())
            .collect())
    }
}

/// Labels mentioning "alcohol" in any case ("Alcoholic", "Optional alcohol")
/// go to the classification filter. Negated labels ("Non-Alcoholic",
/// "non_alcoholic", "Non Alcoholic") and everything else are treated as
/// categories.
///
/// The match is a plain substring check on the lowercased label, so
/// "alco-hol" is a category. Separators (`-`, `_`, whitespace) are only
/// skipped when looking for the "non" prefix.
pub fn type_filter(label: &str) -> Query<'_> {
    let lowered = label.to_lowercase();
    let joined: String = lowered
        .chars()
        .filter(|c| !(*c == '-' || *c == '_' || c.is_whitespace()))
        .collect();
    if lowered.contains("alcohol") && !joined.contains("nonalcohol") {
        Query::FilterByAlcoholic(label)
    } else {
        Query::FilterByCategory(label)
    }
}
