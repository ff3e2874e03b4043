//! The bar counter: full drink recipes by name, first letter, id, or at random.
//!
//! Ordering and presenting are separate steps. An `order_*` call replaces the
//! desk's stored records and hands the desk back, so presentation can be
//! chained onto it:
//!
//! ```no_run
//! use mcp_cocktaildb::client::{CocktailDbClient, OrderDesk};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut desk = OrderDesk::new(CocktailDbClient::default());
//! let margarita = desk.order_by_name("margarita").await?.details()?;
//! println!("{:?}", margarita);
//! # Ok(())
//! # }
//! ```

use crate::client::{
    client::{CocktailDbClient, Query},
    error::{CocktailError, Result},
    types::{DrinkDetail, DrinkRecord, Matches},
};

#[derive(Debug, Clone)]
pub struct OrderDesk {
    client: CocktailDbClient,
    drinks: Option<Vec<DrinkRecord>>,
}

impl OrderDesk {
    pub fn new(client: CocktailDbClient) -> Self {
        Self {
            client,
            drinks: None,
        }
    }

    pub async fn order_by_name(&mut self, name: &str) -> Result<&mut Self> {
        self.order(Query::DrinkByName(name)).await
    }

    pub async fn order_by_first_letter(&mut self, letter: char) -> Result<&mut Self> {
        self.order(Query::DrinkByFirstLetter(letter)).await
    }

    /// Unknown ids are not an error; the desk ends up holding no drinks.
    pub async fn order_by_id(&mut self, id: u64) -> Result<&mut Self> {
        self.order(Query::DrinkById(id)).await
    }

    pub async fn order_random(&mut self) -> Result<&mut Self> {
        self.order(Query::RandomDrink).await
    }

    async fn order(&mut self, query: Query<'_>) -> Result<&mut Self> {
        let drinks: Vec<DrinkRecord> = self.client.fetch_drinks(query).await?;
        tracing::debug!("Order {:?} returned {} drinks", query, drinks.len());
        self.drinks = Some(drinks);
        Ok(self)
    }

    /// Raw records from the last successful order.
    pub fn records(&self) -> Result<&[DrinkRecord]> {
        self.drinks
            .as_deref()
            .ok_or_else(|| CocktailError::contract("no drink has been ordered yet"))
    }

    pub fn names(&self) -> Result<Matches<String>> {
        Ok(drink_names(self.records()?))
    }

    pub fn details(&self) -> Result<Matches<DrinkDetail>> {
        Ok(drink_details(self.records()?))
    }
}

pub fn drink_names(drinks: &[DrinkRecord]) -> Matches<String> {
    drinks
        .iter()
        .map(|drink| drink.name.clone())
        .collect::<Vec<_>>()
        .into()
}

pub fn drink_details(drinks: &[DrinkRecord]) -> Matches<DrinkDetail> {
    drinks
        .iter()
        .map(DrinkRecord::to_detail)
        .collect::<Vec<_>>()
        .into()
}
