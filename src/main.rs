//! `conversation-api` server binary.

use std::sync::Arc;

use http::HeaderValue;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use conversation_api::adapters::http::{api_router, AppState};
use conversation_api::adapters::{
    ConnectedAccountsApiConfig, HttpConnectedAccounts, InMemoryConversationStore, JwtConfig,
    JwtSessionValidator, PostgresConversationStore,
};
use conversation_api::config::{AppConfig, DatabaseConfig, ServerConfig};
use conversation_api::ports::{ConnectedAccounts, ConversationStore, SessionValidator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let session_validator: Arc<dyn SessionValidator> = {
        let mut jwt = JwtConfig::new(config.auth.jwt_secret.expose_secret().clone());
        if let Some(issuer) = &config.auth.issuer {
            jwt = jwt.with_issuer(issuer);
        }
        if let Some(audience) = &config.auth.audience {
            jwt = jwt.with_audience(audience);
        }
        Arc::new(JwtSessionValidator::new(jwt))
    };

    let store = build_store(config.database.as_ref()).await?;

    let connected_accounts: Arc<dyn ConnectedAccounts> = Arc::new(HttpConnectedAccounts::new(
        ConnectedAccountsApiConfig::new(
            config.connected_accounts.api_key.expose_secret().clone(),
        )
        .with_base_url(&config.connected_accounts.api_base_url),
    ));

    let state = AppState::new(
        session_validator,
        store,
        connected_accounts,
        config.connected_accounts.callback_url.clone(),
    );

    let app = api_router(state)
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "conversation-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn build_store(database: Option<&DatabaseConfig>) -> Result<Arc<dyn ConversationStore>, BoxError> {
    let Some(database) = database else {
        tracing::warn!("No database configured; conversations are kept in memory");
        return Ok(Arc::new(InMemoryConversationStore::new()));
    };

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    let store = PostgresConversationStore::new(pool);
    if database.ensure_schema {
        store.ensure_schema().await?;
        tracing::info!("Conversation schema ensured");
    }
    Ok(Arc::new(store))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed.
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
