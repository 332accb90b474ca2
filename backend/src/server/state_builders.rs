//! Builders wiring settings into the HTTP state.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;
use tracing::info;

use crate::domain::UserRegistrationService;
use crate::domain::ports::{AuditSink, UserRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::audit::JsonLinesAuditLog;
use crate::outbound::persistence::{AcquireError, ConnectionSource, DieselUserRepository};
use crate::settings::{AppSettings, SettingsError};

/// Failures while assembling the application from its settings.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Database(#[from] AcquireError),
    #[error("failed to open audit log {}: {source}", path.display())]
    AuditLog {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// HTTP state whose registration use-case runs against `users` and `audit`.
pub fn registration_state(
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditSink>,
) -> web::Data<HttpState> {
    let service = UserRegistrationService::new(users, audit);
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Build the production state: PostgreSQL repository and file audit log.
///
/// No database connection is opened here for the per-request policy; the
/// pooled policy builds its pool without idle connections.
///
/// # Errors
///
/// Returns [`StartupError`] for invalid settings, an unbuildable pool, or an
/// audit log directory that cannot be opened.
pub async fn build_http_state(
    settings: &AppSettings,
) -> Result<web::Data<HttpState>, StartupError> {
    let policy = settings.connection_policy()?;
    let connections =
        ConnectionSource::connect(policy, settings.database_url(), settings.pool_settings()?)
            .await?;

    let path = settings.audit_log_path();
    let audit = JsonLinesAuditLog::open(&path)
        .map_err(|source| StartupError::AuditLog { path, source })?;

    info!(
        connection_policy = %policy,
        audit_log = %audit.path().display(),
        "storage adapters configured"
    );
    Ok(registration_state(
        Arc::new(DieselUserRepository::new(connections)),
        Arc::new(audit),
    ))
}
