mod common;

use common::MockCocktailDb;
use mcp_cocktaildb::client::{IngredientLookup, KeyType, Matches};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_lookup_by_name_collapses_single_record() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?i=vodka", json!({ "ingredients": [common::vodka()] }))
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    let record = lookup
        .lookup("vodka", KeyType::Name)
        .await
        .unwrap()
        .record()
        .unwrap()
        .clone();

    let vodka = match record {
        Matches::Single(vodka) => vodka,
        other => panic!("expected a single ingredient, got {:?}", other),
    };
    assert_eq!(vodka.id, "1");
    assert_eq!(vodka.name, "Vodka");
    assert_eq!(vodka.alcohol.as_deref(), Some("Yes"));
    assert_eq!(lookup.key(), Some(("vodka", KeyType::Name)));
}

#[tokio::test]
async fn test_recipes_using_reuses_name_key() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?i=vodka", json!({ "ingredients": [common::vodka()] }))
        .json(
            "filter.php?i=vodka",
            json!({ "drinks": [
                common::summary("11000", "Black Russian"),
                common::summary("11001", "Bloody Mary"),
            ]}),
        )
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    let recipes = lookup
        .lookup("vodka", KeyType::Name)
        .await
        .unwrap()
        .recipes_using()
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].name, "Black Russian");
    assert_eq!(
        mock.requests(),
        vec!["search.php?i=vodka", "filter.php?i=vodka"]
    );
}

#[tokio::test]
async fn test_recipes_after_id_lookup_is_a_contract_violation() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?iid=1", json!({ "ingredients": [common::vodka()] }))
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    lookup.lookup("1", KeyType::Id).await.unwrap();

    let err = lookup.recipes_using().await.unwrap_err();

    assert!(err.is_contract_violation(), "unexpected error: {}", err);
    assert_eq!(mock.requests(), vec!["search.php?iid=1"]);
}

#[tokio::test]
async fn test_recipes_before_lookup_is_a_contract_violation() {
    let lookup = IngredientLookup::new(mcp_cocktaildb::CocktailDbClient::default());

    assert!(lookup.recipes_using().await.unwrap_err().is_contract_violation());
    assert!(lookup.record().unwrap_err().is_contract_violation());
}

#[tokio::test]
async fn test_unsupported_key_type_fails_before_any_request() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder().start().await;

    let mut lookup = IngredientLookup::new(mock.client());
    let err = lookup.lookup_by("vodka", "title").await.unwrap_err();

    assert!(err.is_contract_violation());
    assert!(mock.requests().is_empty());
    assert_eq!(lookup.key(), None);
}

#[tokio::test]
async fn test_lookup_by_string_key_type() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?iid=1", json!({ "ingredients": [common::vodka()] }))
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    lookup.lookup_by("1", "id").await.unwrap();

    assert_eq!(lookup.key(), Some(("1", KeyType::Id)));
    assert_eq!(lookup.record().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_ingredient_is_empty() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?i=unobtainium", json!({ "ingredients": null }))
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    lookup.lookup("unobtainium", KeyType::Name).await.unwrap();

    assert_eq!(lookup.record().unwrap(), &Matches::Empty);
}

#[tokio::test]
async fn test_malformed_lookup_keeps_previous_key() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json("search.php?i=vodka", json!({ "ingredients": [common::vodka()] }))
        .raw("search.php?i=gin", 200, "not json")
        .start()
        .await;

    let mut lookup = IngredientLookup::new(mock.client());
    lookup.lookup("vodka", KeyType::Name).await.unwrap();

    let err = lookup.lookup("gin", KeyType::Name).await.unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(lookup.key(), Some(("vodka", KeyType::Name)));
    assert_eq!(
        lookup.record().unwrap().single().map(|r| r.name.as_str()),
        Some("Vodka")
    );
}

#[tokio::test]
async fn test_all_ingredient_names() {
    common::init_test_logging();
    let mock = MockCocktailDb::builder()
        .json(
            "list.php?i=list",
            json!({ "drinks": [
                { "strIngredient1": "Light rum" },
                { "strIngredient1": "Vodka" },
            ]}),
        )
        .start()
        .await;

    let names = IngredientLookup::new(mock.client())
        .all_ingredient_names()
        .await
        .unwrap();

    assert_eq!(names, vec!["Light rum", "Vodka"]);
}
