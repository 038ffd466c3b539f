use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homestead_backend::{
    config::Config, repositories::FixtureAdminData, routes::build_app, state::AppState,
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homestead_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        jwt_secret = %mask_secret(&config.jwt_secret),
        session_expiration_hours = config.session_expiration_hours,
        cors_allow_origins = ?config.cors_allow_origins,
        users_per_page = config.users_per_page,
        "Loaded configuration from environment/.env"
    );

    let data = FixtureAdminData::load()?;
    let addr = config.socket_addr()?;
    let app = build_app(AppState::new(config, Arc::new(data)))?;

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
