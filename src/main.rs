use mcp_cocktaildb::client::{CocktailDbClient, DEFAULT_BASE_URL};
use mcp_cocktaildb::server::CocktailMcpServer;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables; an explicit base URL wins over the key
    let client = match (env::var("COCKTAILDB_BASE_URL"), env::var("COCKTAILDB_API_KEY")) {
        (Ok(base_url), _) => CocktailDbClient::new(base_url),
        (Err(_), Ok(api_key)) => CocktailDbClient::with_api_key(&api_key),
        (Err(_), Err(_)) => CocktailDbClient::new(DEFAULT_BASE_URL.to_string()),
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    tracing::info!("Using TheCocktailDB at {}", client.base_url());

    let test_server = CocktailMcpServer::new(client.clone());
    match test_server.test_api_access().await {
        Ok(_) => {
            tracing::info!("API access test passed");
        }
        Err(e) => {
            tracing::warn!("API access test failed: {}", e);
            tracing::warn!("The server will continue, but tool calls will fail until TheCocktailDB is reachable.");
            tracing::warn!("Check COCKTAILDB_BASE_URL / COCKTAILDB_API_KEY and network access.");
        }
    }

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("CocktailDB MCP Server listening on {}", config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(config).await?;

    let ct = sse_server.with_service(move || CocktailMcpServer::new(client.clone()));

    tracing::info!("CocktailDB MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
