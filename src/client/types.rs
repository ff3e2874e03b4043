//! Type definitions for TheCocktailDB API.
//!
//! Raw records mirror the upstream JSON field names; the normalized shapes
//! ([`DrinkDetail`], [`Matches`]) are what the façades hand back to callers.
//!
//! ## Key Types
//!
//! - [`DrinkRecord`] - Full drink as returned by search/lookup/random (with custom deserializer
//!   for the numbered ingredient/measure slots)
//! - [`DrinkSummary`] - id/name/thumbnail triple returned by the filter endpoints
//! - [`IngredientRecord`] - Ingredient metadata returned by the ingredient search
//! - [`DrinkDetail`] - Normalized drink with an ingredient-to-measure map
//! - [`Matches`] - Empty / single / many result, replacing the "one item unwrapped" convention

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of ingredient/measure slot pairs a drink record carries.
pub const INGREDIENT_SLOTS: usize = 14;

/// Measure used when a drink lists an ingredient without a quantity.
pub const UNMEASURED: &str = "a tiny winy bit";

/// Response envelope for endpoints answering with a `"drinks"` field.
///
/// The service sends `null` instead of an empty array when nothing matched,
/// and some filter queries answer with a bare string such as `"no data found"`.
/// Both come out as `None`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DrinksEnvelope<T> {
    #[serde(default, deserialize_with = "nullable_list")]
    pub drinks: Option<Vec<T>>,
}

/// Response envelope for the ingredient search endpoint.
#[derive(Debug, Deserialize)]
pub struct IngredientsEnvelope {
    #[serde(default, deserialize_with = "nullable_list")]
    pub ingredients: Option<Vec<IngredientRecord>>,
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field<T> {
        List(Vec<T>),
        Placeholder(String),
    }

    match Option::<Field<T>>::deserialize(deserializer)? {
        Some(Field::List(items)) => Ok(Some(items)),
        Some(Field::Placeholder(_)) | None => Ok(None),
    }
}

/// A complete drink recipe as served by `search.php`, `lookup.php` and `random.php`.
///
/// Upstream flattens the ingredient list into `strIngredient1..14` /
/// `strMeasure1..14`; this type keeps them as two fixed arrays indexed from 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrinkRecord {
    /// Numeric-looking drink identifier (`idDrink`)
    pub id: String,
    /// Drink name (`strDrink`)
    pub name: String,
    /// Glass the drink is served in (`strGlass`)
    pub glass: Option<String>,
    /// Free-text preparation instructions (`strInstructions`)
    pub instructions: Option<String>,
    /// Category such as "Ordinary Drink" (`strCategory`)
    pub category: Option<String>,
    /// Alcoholic classification label (`strAlcoholic`)
    pub alcoholic: Option<String>,
    /// Thumbnail image URL (`strDrinkThumb`)
    pub thumbnail: Option<String>,
    /// Ingredient slots, `ingredients[0]` is `strIngredient1`
    pub ingredients: [Option<String>; INGREDIENT_SLOTS],
    /// Measure slots, `measures[0]` is `strMeasure1`
    pub measures: [Option<String>; INGREDIENT_SLOTS],
}

impl DrinkRecord {
    /// Pairs ingredients with their measures.
    ///
    /// Slots are read in order and the scan stops at the first unset
    /// ingredient; anything populated after that gap is ignored.
    pub fn ingredient_measures(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();
        for (ingredient, measure) in self.ingredients.iter().zip(self.measures.iter()) {
            let Some(ingredient) = ingredient else {
                break;
            };
            let measure = measure.clone().unwrap_or_else(|| UNMEASURED.to_string());
            pairs.insert(ingredient.clone(), measure);
        }
        pairs
    }

    pub fn to_detail(&self) -> DrinkDetail {
        DrinkDetail {
            drink_id: self.id.clone(),
            drink_name: self.name.clone(),
            glass: self.glass.clone(),
            ingredients: self.ingredient_measures(),
            instruction: self.instructions.clone(),
        }
    }
}

/// Custom deserializer for DrinkRecord.
///
/// The numbered slot keys can't be expressed with derive attributes without
/// 28 individually renamed fields, so the map is walked by hand and slot keys
/// are parsed into array positions. Unknown keys (translations, image
/// attribution, modification date) are skipped.
impl<'de> Deserialize<'de> for DrinkRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct DrinkRecordVisitor;

        impl<'de> Visitor<'de> for DrinkRecordVisitor {
            type Value = DrinkRecord;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a drink object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id = None;
                let mut name = None;
                let mut record = DrinkRecord::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "idDrink" => id = Some(map.next_value::<IdValue>()?.0),
                        "strDrink" => name = Some(map.next_value()?),
                        "strGlass" => record.glass = map.next_value()?,
                        "strInstructions" => record.instructions = map.next_value()?,
                        "strCategory" => record.category = map.next_value()?,
                        "strAlcoholic" => record.alcoholic = map.next_value()?,
                        "strDrinkThumb" => record.thumbnail = map.next_value()?,
                        other => {
                            if let Some(slot) = slot_index(other, "strIngredient") {
                                record.ingredients[slot] = map.next_value()?;
                            } else if let Some(slot) = slot_index(other, "strMeasure") {
                                record.measures[slot] = map.next_value()?;
                            } else {
                                map.next_value::<de::IgnoredAny>()?;
                            }
                        }
                    }
                }

                record.id = id.ok_or_else(|| de::Error::missing_field("idDrink"))?;
                record.name = name.ok_or_else(|| de::Error::missing_field("strDrink"))?;
                Ok(record)
            }
        }

        deserializer.deserialize_map(DrinkRecordVisitor)
    }
}

/// Maps `strIngredient7` to slot 6; `None` for other keys or out-of-range numbers.
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let number: usize = key.strip_prefix(prefix)?.parse().ok()?;
    (1..=INGREDIENT_SLOTS).contains(&number).then(|| number - 1)
}

/// Identifier that upstream sends as a string but occasionally as a bare number.
struct IdValue(String);

impl<'de> Deserialize<'de> for IdValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(IdValue(s)),
            serde_json::Value::Number(n) => Ok(IdValue(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {}",
                other
            ))),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    IdValue::deserialize(deserializer).map(|IdValue(id)| id)
}

/// Normalized projection of a [`DrinkRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkDetail {
    pub drink_id: String,
    pub drink_name: String,
    pub glass: Option<String>,
    /// Ingredient name to measure; measure is [`UNMEASURED`] when upstream had none
    pub ingredients: BTreeMap<String, String>,
    pub instruction: Option<String>,
}

/// Drink summary returned by `filter.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkSummary {
    #[serde(rename = "idDrink", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
}

/// Ingredient metadata returned by `search.php?i=` / `search.php?iid=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "idIngredient")]
    pub id: String,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription", default)]
    pub description: Option<String>,
    #[serde(rename = "strType", default)]
    pub kind: Option<String>,
    /// "Yes"/"No" as sent by upstream
    #[serde(rename = "strAlcohol", default)]
    pub alcohol: Option<String>,
    #[serde(rename = "strABV", default)]
    pub abv: Option<String>,
}

/// One element of a `list.php` response.
///
/// Each list endpoint populates exactly one of these fields.
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strIngredient1", default)]
    pub ingredient: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
}

/// Result of a query that may match nothing, one item, or several.
///
/// A single match is carried unwrapped so callers can tell "one" from "many"
/// by shape alone. Serializes untagged: `null`, the item, or an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Matches<T> {
    Empty,
    Single(T),
    Many(Vec<T>),
}

impl<T> Matches<T> {
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Matches::Empty,
            1 => Matches::Single(items.remove(0)),
            _ => Matches::Many(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Matches::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Matches::Empty => 0,
            Matches::Single(_) => 1,
            Matches::Many(items) => items.len(),
        }
    }

    pub fn single(&self) -> Option<&T> {
        match self {
            Matches::Single(item) => Some(item),
            _ => None,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Matches<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Matches::Empty => Matches::Empty,
            Matches::Single(item) => Matches::Single(f(item)),
            Matches::Many(items) => Matches::Many(items.into_iter().map(f).collect()),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Matches::Empty => Vec::new(),
            Matches::Single(item) => vec![item],
            Matches::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for Matches<T> {
    fn from(items: Vec<T>) -> Self {
        Matches::from_vec(items)
    }
}
