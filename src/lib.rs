pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod forms;
pub mod models;
pub mod views;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Commands;
pub use config::Config;

pub async fn run(command: Option<Commands>, config: Config) -> anyhow::Result<()> {
    config.validate()?;

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    init_tracing(&config)?;

    match command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config, prometheus_handle).await,
        Commands::Seed => cli::cmd_seed(&config).await,
        Commands::InitConfig => cli::cmd_init_config(None),
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let (layer, task) = tracing_loki::builder()
            .label("app", "fyyur")?
            .extra_field("env", "production")?
            .build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = api::create_app_state(config, prometheus_handle).await?;

    state.store().ping().await.context("Database is not reachable")?;
    let venues = state.store().count_venues().await?;
    let artists = state.store().count_artists().await?;
    info!(venues, artists, "Store ready");

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }
}
