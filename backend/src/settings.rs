//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FEEDING_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the feeding log server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEEDING")]
pub struct AppSettings {
    /// Address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string. Records stay in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Return the database URL if one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool size.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("feeding-log")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("FEEDING_BIND_ADDR", None::<String>),
            ("FEEDING_DATABASE_URL", None::<String>),
            ("FEEDING_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FEEDING_BIND_ADDR", Some("127.0.0.1:3000".to_owned())),
            (
                "FEEDING_DATABASE_URL",
                Some("postgres://cats@localhost/feeding".to_owned()),
            ),
            ("FEEDING_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(
            settings.database_url(),
            Some("postgres://cats@localhost/feeding")
        );
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("FEEDING_BIND_ADDR", None::<String>),
            ("FEEDING_DATABASE_URL", Some("  ".to_owned())),
            ("FEEDING_POOL_MAX_SIZE", None::<String>),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
