use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wikilens_core::{Analyzer, AnalyzerConfig, ConfigLoader, ConfigLoaderBuilder, WikiClient, WikiConfig};
use wikilens_server::{AppState, ArticleStore, MemoryStore, PostgresStore, ServerConfig, StaticCredentials, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wikilens_server=info,wikilens_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let wiki = WikiClient::new(WikiConfig { language: config.language.clone(), ..Default::default() })
        .context("Failed to create encyclopedia client")?;
    let analyzer = build_analyzer(&config, &wiki)?;

    let store: Arc<dyn ArticleStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("using PostgreSQL store");
            Arc::new(PostgresStore::connect(url).await?)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, saved articles are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let credentials = StaticCredentials::parse(config.users.as_deref().unwrap_or_default())
        .map_err(anyhow::Error::msg)
        .context("Invalid WIKILENS_USERS")?;
    if credentials.is_empty() {
        tracing::warn!("WIKILENS_USERS not set, every login will be rejected");
    }

    let state = AppState::new(analyzer, Arc::new(wiki), store, Arc::new(credentials));
    let app = create_app(state, config.request_timeout);

    tracing::info!(addr = %config.addr, language = %config.language, "starting wikilens server");

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// Analyzer config: language-specific link base, then directive files.
fn build_analyzer(config: &ServerConfig, wiki: &WikiClient) -> anyhow::Result<Analyzer> {
    let base = AnalyzerConfig::builder().wiki_base_url(wiki.config().page_base_url()?.as_str()).build();

    let mut loader = ConfigLoaderBuilder::new().base(base);
    if let Some(dir) = ConfigLoader::default_user_dir() {
        loader = loader.user_dir(dir);
    }
    if let Some(file) = &config.analyzer_config {
        loader = loader.file(file);
    }

    let analyzer_config = loader.build().load().context("Failed to load analyzer configuration")?;
    Analyzer::with_config(analyzer_config).context("Invalid analyzer configuration")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
