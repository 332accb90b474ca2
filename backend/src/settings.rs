//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_INTAKE_*` environment variables, or a
//! configuration file. `pool_max_size` carries a declared default; the other
//! fields are optional and their accessors apply defaults and parse the
//! textual values into typed ones.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{ConnectionPolicy, PoolSettings, UnknownConnectionPolicy};

/// PostgreSQL URL used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/user_intake";
/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
/// Audit log file used when none is configured.
pub const DEFAULT_AUDIT_LOG_PATH: &str = "users.json";
/// Pooled connection cap used when none is configured.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Invalid setting values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    ConnectionPolicy(#[from] UnknownConnectionPolicy),
    #[error("pool_max_size must be at least 1")]
    PoolSize,
}

/// Settings for the user intake service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_INTAKE")]
pub struct AppSettings {
    /// PostgreSQL connection URL, credentials included.
    pub database_url: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// File receiving one JSON line per created user.
    pub audit_log_path: Option<PathBuf>,
    /// `per_request` or `pooled`.
    pub connection_policy: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: None,
            audit_log_path: None,
            connection_policy: None,
            pool_max_size: DEFAULT_POOL_MAX_SIZE,
        }
    }
}

impl AppSettings {
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.audit_log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIT_LOG_PATH))
    }

    /// Parsed connection policy, `per_request` when unset.
    ///
    /// # Errors
    ///
    /// [`SettingsError::ConnectionPolicy`] for unrecognised names.
    pub fn connection_policy(&self) -> Result<ConnectionPolicy, SettingsError> {
        match self.connection_policy.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(ConnectionPolicy::default()),
        }
    }

    /// Pool sizing derived from `pool_max_size`.
    ///
    /// # Errors
    ///
    /// [`SettingsError::PoolSize`] when the size is zero.
    pub fn pool_settings(&self) -> Result<PoolSettings, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::PoolSize),
            size => Ok(PoolSettings::default().with_max_size(size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "USER_INTAKE_DATABASE_URL",
        "USER_INTAKE_BIND_ADDR",
        "USER_INTAKE_AUDIT_LOG_PATH",
        "USER_INTAKE_CONNECTION_POLICY",
        "USER_INTAKE_POOL_MAX_SIZE",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("user-intake")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            SocketAddr::from(([0, 0, 0, 0], 8000))
        );
        assert_eq!(settings.audit_log_path(), PathBuf::from("users.json"));
        assert_eq!(
            settings.connection_policy().expect("default policy"),
            ConnectionPolicy::PerRequest
        );
        assert_eq!(
            settings.pool_settings().expect("pool").max_size(),
            DEFAULT_POOL_MAX_SIZE
        );
    }

    #[rstest]
    fn bare_load_matches_manual_defaults() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let loaded = load_from_empty_args();
        let fallback = AppSettings::default();

        assert_eq!(loaded.pool_max_size, fallback.pool_max_size);
        assert_eq!(loaded.database_url, None);
        assert_eq!(loaded.bind_addr, None);
        assert_eq!(loaded.audit_log_path, None);
        assert_eq!(loaded.connection_policy, None);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "USER_INTAKE_DATABASE_URL",
                Some("postgres://intake:secret@db/intake".to_owned()),
            ),
            ("USER_INTAKE_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "USER_INTAKE_AUDIT_LOG_PATH",
                Some("/var/log/intake/users.json".to_owned()),
            ),
            ("USER_INTAKE_CONNECTION_POLICY", Some("pooled".to_owned())),
            ("USER_INTAKE_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url(), "postgres://intake:secret@db/intake");
        assert_eq!(
            settings.bind_addr().expect("address parses"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(
            settings.audit_log_path(),
            PathBuf::from("/var/log/intake/users.json")
        );
        assert_eq!(
            settings.connection_policy().expect("policy parses"),
            ConnectionPolicy::Pooled
        );
        assert_eq!(settings.pool_settings().expect("pool").max_size(), 4);
    }

    #[rstest]
    fn invalid_values_are_reported() {
        let settings = AppSettings {
            bind_addr: Some("localhost".to_owned()),
            connection_policy: Some("shared".to_owned()),
            pool_max_size: 0,
            ..AppSettings::default()
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
        assert!(matches!(
            settings.connection_policy(),
            Err(SettingsError::ConnectionPolicy(_))
        ));
        assert!(matches!(settings.pool_settings(), Err(SettingsError::PoolSize)));
    }
}
