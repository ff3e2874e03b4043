// Named unqualified by the #[tool] and #[tool_handler] expansions.
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{
    CatalogBrowser, CatalogKind, CocktailDbClient, CocktailError, IngredientLookup, ItemBrowser,
    KeyType, OrderDesk,
};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OrderByNameParams {
    pub name: String,
    #[serde(default)]
    pub names_only: bool,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OrderByFirstLetterParams {
    pub letter: String,
    #[serde(default)]
    pub names_only: bool,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetDrinkByIdParams {
    pub id: u64,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterDrinksParams {
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub drink_type: Option<String>,
    #[serde(default)]
    pub container: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListCatalogParams {
    pub kind: String, // categories, glasses, ingredients or alcoholic
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LookupIngredientParams {
    pub key: String,
    #[serde(default = "default_key_type")]
    pub key_type: String,
}

/// The single filter a [`FilterDrinksParams`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkFilter<'a> {
    Ingredient(&'a str),
    Type(&'a str),
    Container(&'a str),
}

impl FilterDrinksParams {
    /// Exactly one of `ingredient`, `drink_type` or `container` must be set.
    pub fn choice(&self) -> Result<DrinkFilter<'_>, CocktailError> {
        match (&self.ingredient, &self.drink_type, &self.container) {
            (Some(ingredient), None, None) => Ok(DrinkFilter::Ingredient(ingredient)),
            (None, Some(drink_type), None) => Ok(DrinkFilter::Type(drink_type)),
            (None, None, Some(container)) => Ok(DrinkFilter::Container(container)),
            _ => Err(CocktailError::contract(
                "give exactly one of ingredient, drink_type or container",
            )),
        }
    }
}

/// Parses a first-letter argument, which must be exactly one character.
pub fn single_letter(input: &str) -> Result<char, CocktailError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(CocktailError::contract(format!(
            "expected a single letter, got '{}'",
            input
        ))),
    }
}

fn default_key_type() -> String {
    "name".to_string()
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RecipesUsingParams {
    pub ingredient: String,
}

#[derive(Clone)]
pub struct CocktailMcpServer {
    client: CocktailDbClient,
    tool_router: ToolRouter<CocktailMcpServer>,
}

#[tool_router]
impl CocktailMcpServer {
    pub fn new(client: CocktailDbClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self::new(CocktailDbClient::new(base_url))
    }

    pub fn client(&self) -> &CocktailDbClient {
        &self.client
    }

    pub async fn test_api_access(&self) -> Result<(), anyhow::Error> {
        tracing::debug!("Testing API access by fetching categories...");
        match CatalogBrowser::new(self.client.clone()).categories().await {
            Ok(categories) => {
                tracing::info!("API access test successful - found {} categories", categories.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("API access test failed: {}", e);
                Err(e.into())
            }
        }
    }

    // Bar tools
    #[tool(description = "Order drinks by (partial) name and get their full recipes")]
    pub async fn order_drink_by_name(
        &self,
        Parameters(params): Parameters<OrderByNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut desk = OrderDesk::new(self.client.clone());

        match desk.order_by_name(&params.name).await {
            Ok(desk) => present_order(desk, params.names_only),
            Err(e) => error_result("Failed to order drink by name", &e),
        }
    }

    #[tool(description = "Order every drink whose name starts with the given letter")]
    pub async fn order_drinks_by_first_letter(
        &self,
        Parameters(params): Parameters<OrderByFirstLetterParams>,
    ) -> Result<CallToolResult, McpError> {
        let letter = match single_letter(&params.letter) {
            Ok(letter) => letter,
            Err(e) => return error_result("Failed to order drinks by first letter", &e),
        };

        let mut desk = OrderDesk::new(self.client.clone());

        match desk.order_by_first_letter(letter).await {
            Ok(desk) => present_order(desk, params.names_only),
            Err(e) => error_result("Failed to order drinks by first letter", &e),
        }
    }

    #[tool(description = "Get the full recipe of a drink by its numeric id")]
    pub async fn get_drink_by_id(
        &self,
        Parameters(params): Parameters<GetDrinkByIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut desk = OrderDesk::new(self.client.clone());

        match desk.order_by_id(params.id).await {
            Ok(desk) => present_order(desk, false),
            Err(e) => error_result("Failed to get drink", &e),
        }
    }

    #[tool(description = "Let the bartender pick a random drink")]
    pub async fn random_drink(&self) -> Result<CallToolResult, McpError> {
        let mut desk = OrderDesk::new(self.client.clone());

        match desk.order_random().await {
            Ok(desk) => present_order(desk, false),
            Err(e) => error_result("Failed to get a random drink", &e),
        }
    }

    // Shelves tools
    #[tool(description = "List drinks by ingredient, by type (category or alcoholic label) or by glass")]
    pub async fn filter_drinks(
        &self,
        Parameters(params): Parameters<FilterDrinksParams>,
    ) -> Result<CallToolResult, McpError> {
        let choice = match params.choice() {
            Ok(choice) => choice,
            Err(e) => return error_result("Failed to filter drinks", &e),
        };

        let mut shelves = ItemBrowser::new(self.client.clone());

        let filtered = match choice {
            DrinkFilter::Ingredient(ingredient) => shelves.filter_by_ingredient(ingredient).await,
            DrinkFilter::Type(drink_type) => shelves.filter_by_type(drink_type).await,
            DrinkFilter::Container(container) => shelves.filter_by_container(container).await,
        };

        match filtered.and_then(|shelves| shelves.summaries().map(|drinks| drinks.to_vec())) {
            Ok(drinks) => {
                let drinks_json: Vec<serde_json::Value> = drinks
                    .into_iter()
                    .map(|drink| {
                        json!({
                            "id": drink.id,
                            "name": drink.name,
                            "thumbnail": drink.thumbnail
                        })
                    })
                    .collect();

                json_result(&json!({
                    "total_count": drinks_json.len(),
                    "drinks": drinks_json
                }))
            }
            Err(e) => error_result("Failed to filter drinks", &e),
        }
    }

    // Inventory tools
    #[tool(description = "List all categories, glasses, ingredients or alcoholic labels")]
    pub async fn list_catalog(
        &self,
        Parameters(params): Parameters<ListCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        let kind: CatalogKind = match params.kind.parse() {
            Ok(kind) => kind,
            Err(e) => return error_result("Failed to list catalog", &e),
        };

        match CatalogBrowser::new(self.client.clone()).list(kind).await {
            Ok(entries) => json_result(&json!({
                "kind": params.kind,
                "total_count": entries.len(),
                "entries": entries
            })),
            Err(e) => error_result("Failed to list catalog", &e),
        }
    }

    // Ingredient tools
    #[tool(description = "Look an ingredient up by name or id")]
    pub async fn lookup_ingredient(
        &self,
        Parameters(params): Parameters<LookupIngredientParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut lookup = IngredientLookup::new(self.client.clone());

        match lookup.lookup_by(&params.key, &params.key_type).await {
            Ok(lookup) => match lookup.record() {
                Ok(record) => json_result(&json!({
                    "key": params.key,
                    "key_type": params.key_type,
                    "ingredient": record
                })),
                Err(e) => error_result("Failed to look up ingredient", &e),
            },
            Err(e) => error_result("Failed to look up ingredient", &e),
        }
    }

    #[tool(description = "List the drinks that use an ingredient")]
    pub async fn recipes_using_ingredient(
        &self,
        Parameters(params): Parameters<RecipesUsingParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut lookup = IngredientLookup::new(self.client.clone());

        let recipes = match lookup.lookup(&params.ingredient, KeyType::Name).await {
            Ok(lookup) => lookup.recipes_using().await,
            Err(e) => Err(e),
        };

        match recipes {
            Ok(drinks) => json_result(&json!({
                "ingredient": params.ingredient,
                "total_count": drinks.len(),
                "drinks": drinks
            })),
            Err(e) => error_result("Failed to list recipes for ingredient", &e),
        }
    }
}

/// Renders an order as `{"names": ...}` or `{"drinks": ...}`, collapsed by count.
pub fn present_order(desk: &OrderDesk, names_only: bool) -> Result<CallToolResult, McpError> {
    let presented = if names_only {
        desk.names().map(|names| json!({ "names": names }))
    } else {
        desk.details().map(|details| json!({ "drinks": details }))
    };

    match presented {
        Ok(result) => json_result(&result),
        Err(e) => error_result("Failed to present order", &e),
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn error_result(action: &str, e: &CocktailError) -> Result<CallToolResult, McpError> {
    tracing::error!("{}: {}", action, e);

    let error = json!({
        "error": action,
        "details": e.to_string(),
        "suggestion": error_suggestion(e)
    });
    Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
}

pub fn error_suggestion(e: &CocktailError) -> &'static str {
    match e {
        CocktailError::ContractViolation(_) => "Check the tool arguments",
        CocktailError::MalformedResponse { .. } => {
            "TheCocktailDB returned something that is not JSON; check the name or id and try again"
        }
        CocktailError::Http(_) => "Check network access to TheCocktailDB",
        CocktailError::Status { .. } => "Check the configured base URL and API key",
    }
}

#[tool_handler]
impl ServerHandler for CocktailMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server looks up cocktails in TheCocktailDB. Order drinks by name, first letter, id or at random to get full recipes; filter drinks by ingredient, type or glass; list all categories, glasses, ingredients and alcoholic labels; look up ingredient details and the drinks that use them.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
