use folio_core::application::{ports::time::Clock, services::ApplicationServices};
use folio_core::config::AppConfig;
use folio_core::domain::{article::ArticleProvider, folder::FolderProvider};
use folio_core::infrastructure::{
    repositories::{InMemoryArticleProvider, InMemoryFolderProvider, SeedDocument},
    time::SystemClock,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let seed = match config.seed_file() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed document");
            SeedDocument::load(path)?
        }
        None => SeedDocument::default(),
    };
    tracing::info!(
        folders = seed.folders.len(),
        articles = seed.articles.len(),
        "providers initialised"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let folder_provider: Arc<dyn FolderProvider> =
        Arc::new(InMemoryFolderProvider::new(seed.folders)?);
    let article_provider: Arc<dyn ArticleProvider> = Arc::new(InMemoryArticleProvider::new(
        seed.articles,
        Arc::clone(&clock),
    ));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_provider),
        Arc::clone(&folder_provider),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
