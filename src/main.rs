//! The mnema-server binary: configuration, wiring, and the axum server loop.

use anyhow::Context;
use axum::Router;
use mnema::{
    AppState, CompletionClient, Config, HttpMemoryApi, MemoryApi, OpenAiClient,
    api::routes::create_router, cli::Cli,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose {
        "mnema=debug,tower_http=debug"
    } else {
        "mnema=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let memory_api: Arc<dyn MemoryApi> = Arc::new(
        HttpMemoryApi::new(&config.memory_api.base_url, &config.memory_api.api_key)
            .map_err(|e| anyhow::anyhow!("memory API client: {e}"))?,
    );
    let completion: Arc<dyn CompletionClient> = Arc::new(OpenAiClient::new(
        config.llm.openai_api_key.clone(),
        config.llm.openai_api_base.clone(),
        config.llm.model.clone(),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        memory_api,
        completion,
    };

    // Browser callers get a permissive CORS policy, mirroring the open
    // function-endpoint deployment this gateway fronts.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", create_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", mnema::api::ApiDoc::openapi()),
        )
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "mnema-server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
