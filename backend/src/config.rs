//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CAFES_*` environment variables and
//! configuration files, following OrthoConfig's precedence rules.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ApiKey;

const DEFAULT_DATABASE_PATH: &str = "cafes.db";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_POOL_MAX_SIZE: u32 = 4;

/// Configuration values for the cafe directory service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAFES")]
pub struct CafesSettings {
    /// SQLite database file; created on first start.
    pub database_path: Option<PathBuf>,
    /// Shared secret required to delete cafes. Deletion is refused when unset.
    pub api_key: Option<String>,
    /// Interface the HTTP server binds to.
    pub bind_host: Option<String>,
    /// Port the HTTP server binds to.
    #[ortho_config(default = 8080)]
    pub bind_port: u16,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl std::fmt::Debug for CafesSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CafesSettings")
            .field("database_path", &self.database_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("bind_host", &self.bind_host)
            .field("bind_port", &self.bind_port)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

impl CafesSettings {
    /// Return the database path, falling back to `cafes.db`.
    pub fn database_path(&self) -> &Path {
        self.database_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH))
    }

    /// Return the configured API key. Blank values count as unset.
    pub fn api_key(&self) -> Option<ApiKey> {
        self.api_key.as_deref().and_then(ApiKey::new)
    }

    /// Return the pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    ///
    /// Returns an error when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        Ok(SocketAddr::new(host.parse()?, self.bind_port))
    }
}
