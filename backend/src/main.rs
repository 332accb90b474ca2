//! Service entry-point: load settings, wire adapters, serve HTTP.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_intake::inbound::http::health::HealthState;
use user_intake::server::{ServerConfig, build_http_state, create_server};
use user_intake::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let http_state = build_http_state(&settings)
        .await
        .wrap_err("failed to initialise storage adapters")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), http_state, ServerConfig::new(bind_addr))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "user intake service listening");

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
