use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    error::{CocktailError, Result},
    types::*,
};

/// Public endpoint of the free API tier; the trailing `1` is the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Every request the CocktailDB API understands, with its query value.
///
/// Each variant maps to exactly one `path?param=value` pair (or none, for
/// the random drink).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    DrinkByName(&'a str),
    DrinkByFirstLetter(char),
    DrinkById(u64),
    RandomDrink,
    FilterByIngredient(&'a str),
    FilterByAlcoholic(&'a str),
    FilterByCategory(&'a str),
    FilterByGlass(&'a str),
    ListCategories,
    ListGlasses,
    ListIngredients,
    ListAlcoholic,
    IngredientByName(&'a str),
    IngredientById(&'a str),
}

impl Query<'_> {
    pub fn path(&self) -> &'static str {
        match self {
            Query::DrinkByName(_)
            | Query::DrinkByFirstLetter(_)
            | Query::IngredientByName(_)
            | Query::IngredientById(_) => "search.php",
            Query::DrinkById(_) => "lookup.php",
            Query::RandomDrink => "random.php",
            Query::FilterByIngredient(_)
            | Query::FilterByAlcoholic(_)
            | Query::FilterByCategory(_)
            | Query::FilterByGlass(_) => "filter.php",
            Query::ListCategories
            | Query::ListGlasses
            | Query::ListIngredients
            | Query::ListAlcoholic => "list.php",
        }
    }

    /// Query parameter key and raw (unencoded) value.
    pub fn param(&self) -> Option<(&'static str, String)> {
        match *self {
            Query::DrinkByName(name) => Some(("s", name.to_string())),
            Query::DrinkByFirstLetter(letter) => Some(("f", letter.to_string())),
            Query::DrinkById(id) => Some(("i", id.to_string())),
            Query::RandomDrink => None,
            Query::FilterByIngredient(name) => Some(("i", name.to_string())),
            Query::FilterByAlcoholic(label) => Some(("a", label.to_string())),
            Query::FilterByCategory(label) => Some(("c", label.to_string())),
            Query::FilterByGlass(name) => Some(("g", name.to_string())),
            Query::ListCategories => Some(("c", "list".to_string())),
            Query::ListGlasses => Some(("g", "list".to_string())),
            Query::ListIngredients => Some(("i", "list".to_string())),
            Query::ListAlcoholic => Some(("a", "list".to_string())),
            Query::IngredientByName(name) => Some(("i", name.to_string())),
            Query::IngredientById(id) => Some(("iid", id.to_string())),
        }
    }
}

/// Thin HTTP transport shared by the four façades.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    base_url: String,
    client: Client,
}

impl Default for CocktailDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl CocktailDbClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the public service using a (possibly premium) API key.
    pub fn with_api_key(api_key: &str) -> Self {
        Self::new(format!(
            "https://www.thecocktaildb.com/api/json/v1/{}",
            urlencoding::encode(api_key)
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, query: &Query<'_>) -> String {
        let mut url = format!("{}/{}", self.base_url, query.path());
        if let Some((key, value)) = query.param() {
            url.push('?');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
        url
    }

    /// Fetches a `"drinks"` endpoint. A `null` field comes back as an empty list.
    pub async fn fetch_drinks<T: DeserializeOwned>(&self, query: Query<'_>) -> Result<Vec<T>> {
        let envelope: DrinksEnvelope<T> = self.get_json(&query).await?;
        Ok(envelope.drinks.unwrap_or_default())
    }

    /// Fetches the `"ingredients"` endpoint. A `null` field comes back as an empty list.
    pub async fn fetch_ingredients(&self, query: Query<'_>) -> Result<Vec<IngredientRecord>> {
        let envelope: IngredientsEnvelope = self.get_json(&query).await?;
        Ok(envelope.ingredients.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, query: &Query<'_>) -> Result<T> {
        let url = self.url_for(query);
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Network error requesting {}: {}", url, e);
            CocktailError::Http(e)
        })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(CocktailError::Status { url, status });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            tracing::error!("Failed to parse response from {}: {}", url, source);
            CocktailError::MalformedResponse { url, source }
        })
    }
}
