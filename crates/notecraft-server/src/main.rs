use tracing_subscriber::EnvFilter;

use notecraft_server::config::ServerConfig;
use notecraft_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let bedrock = notecraft_bedrock::client::build_client_with_region(&config.region).await;
    let state = AppState::new(&config, bedrock);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        bind = %config.bind,
        region = %config.region,
        approved_notes = %config.approved_notes_path.display(),
        "notecraft server listening"
    );

    axum::serve(listener, notecraft_server::app(state)).await?;
    Ok(())
}
