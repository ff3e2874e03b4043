#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    Router,
};
use mcp_cocktaildb::CocktailDbClient;
use serde_json::{json, Value};

/// Path prefix the mock serves under, mirroring the real `/api/json/v1/{key}`.
pub const API_PREFIX: &str = "/api/json/v1/1";

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for TheCocktailDB.
///
/// Routes are keyed by `path?query` relative to [`API_PREFIX`]. Unregistered
/// routes answer `{"drinks": null}` like the real service does for no matches.
pub struct MockCocktailDb {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockCocktailDb {
    pub fn builder() -> MockBuilder {
        MockBuilder {
            routes: HashMap::new(),
        }
    }

    pub fn client(&self) -> CocktailDbClient {
        CocktailDbClient::new(self.base_url.clone())
    }

    /// Requests received so far, as `path?query` relative to [`API_PREFIX`].
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct MockBuilder {
    routes: HashMap<String, (StatusCode, String)>,
}

impl MockBuilder {
    pub fn json(self, route: &str, body: Value) -> Self {
        self.raw(route, 200, &body.to_string())
    }

    pub fn raw(mut self, route: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes
            .insert(format!("{}/{}", API_PREFIX, route), (status, body.to_string()));
        self
    }

    pub async fn start(self) -> MockCocktailDb {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(self.routes),
            requests: requests.clone(),
        };

        let app: Router = Router::new().fallback(serve).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        MockCocktailDb {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            requests,
        }
    }
}

async fn serve(
    State(state): State<MockState>,
    uri: Uri,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let relative = key
        .strip_prefix(&format!("{}/", API_PREFIX))
        .unwrap_or(&key)
        .to_string();
    state.requests.lock().unwrap().push(relative);

    let (status, body) = state
        .routes
        .get(&key)
        .cloned()
        .unwrap_or((StatusCode::OK, r#"{"drinks":null}"#.to_string()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// A full drink record with all 14 slot pairs present, unused slots null.
pub fn drink(id: &str, name: &str, ingredients: &[(&str, Option<&str>)]) -> Value {
    let mut record = json!({
        "idDrink": id,
        "strDrink": name,
        "strDrinkAlternate": null,
        "strTags": "IBA,ContemporaryClassic",
        "strCategory": "Ordinary Drink",
        "strIBA": "Contemporary Classics",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": format!("Mix the {} and serve.", name),
        "strInstructionsDE": null,
        "strDrinkThumb": format!("https://www.thecocktaildb.com/images/media/drink/{}.jpg", id),
        "dateModified": "2015-08-18 14:42:59"
    });
    let fields = record.as_object_mut().unwrap();
    for slot in 1..=14 {
        let (ingredient, measure) = match ingredients.get(slot - 1) {
            Some((ingredient, measure)) => (json!(ingredient), json!(measure)),
            None => (Value::Null, Value::Null),
        };
        fields.insert(format!("strIngredient{}", slot), ingredient);
        fields.insert(format!("strMeasure{}", slot), measure);
    }
    record
}

pub fn margarita() -> Value {
    drink(
        "11007",
        "Margarita",
        &[
            ("Tequila", Some("1 1/2 oz ")),
            ("Triple sec", Some("1/2 oz ")),
            ("Lime juice", Some("1 oz ")),
            ("Salt", None),
        ],
    )
}

pub fn summary(id: &str, name: &str) -> Value {
    json!({
        "strDrink": name,
        "strDrinkThumb": format!("https://www.thecocktaildb.com/images/media/drink/{}.jpg", id),
        "idDrink": id
    })
}

pub fn vodka() -> Value {
    json!({
        "idIngredient": "1",
        "strIngredient": "Vodka",
        "strDescription": "Vodka is a distilled beverage composed primarily of water and ethanol.",
        "strType": "Vodka",
        "strAlcohol": "Yes",
        "strABV": "40"
    })
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
