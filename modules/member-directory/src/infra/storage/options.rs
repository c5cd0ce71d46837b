//! Typed connection options for the directory store.

use std::time::Duration;

use roster_page::Error;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Deserialize;
use tracing::debug;

/// Connection settings for the relational store backing the directory.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// Database DSN, e.g. `sqlite::memory:` or `postgres://host/db`.
    pub dsn: String,
    /// Maximum pool size; backend default when absent.
    pub max_conns: Option<u32>,
    /// Pool acquire timeout in humantime format (e.g. "30s").
    #[serde(with = "humantime_serde")]
    pub acquire_timeout: Option<Duration>,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
            max_conns: None,
            acquire_timeout: None,
        }
    }
}

impl StorageOptions {
    #[must_use]
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_conns(mut self, max_conns: u32) -> Self {
        self.max_conns = Some(max_conns);
        self
    }
}

/// Open a connection pool described by `opts`.
///
/// # Errors
/// Returns `Error::Db` when the backend rejects the DSN or the connection
/// cannot be established.
pub async fn connect(opts: &StorageOptions) -> Result<DatabaseConnection, Error> {
    let mut conn_opts = ConnectOptions::new(opts.dsn.as_str());
    if let Some(n) = opts.max_conns {
        conn_opts.max_connections(n);
    }
    if let Some(t) = opts.acquire_timeout {
        conn_opts.acquire_timeout(t);
    }
    debug!(max_conns = ?opts.max_conns, "connecting to directory store");
    Database::connect(conn_opts)
        .await
        .map_err(|e| Error::Db(e.to_string()))
}
