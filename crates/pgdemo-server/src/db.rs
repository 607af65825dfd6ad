//! Per-request PostgreSQL access. Every call opens its own connection and
//! discards it afterwards; nothing is pooled.

use pgdemo_config::DbConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection, Row};
use tracing::{debug, warn};

pub const VERSION_QUERY: &str = "SELECT version();";

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("version query failed: {0}")]
    Query(#[source] sqlx::Error),
}

pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
}

/// Opens a connection, reads the server version string and closes the
/// connection again.
pub async fn fetch_version(config: &DbConfig) -> Result<String, DbError> {
    let mut conn = PgConnection::connect_with(&connect_options(config))
        .await
        .map_err(|source| DbError::Connect {
            target: config.target(),
            source,
        })?;

    // On error `conn` is dropped here, which tears down the socket.
    let version: String = sqlx::query(VERSION_QUERY)
        .fetch_one(&mut conn)
        .await
        .and_then(|row| row.try_get::<String, _>(0))
        .map_err(DbError::Query)?;

    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {}", e);
    }

    debug!("Fetched server version from {}", config.target());
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_use_config_values() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            database: "x".into(),
            user: "y".into(),
            password: "z-s3cret".into(),
        };
        let opts = connect_options(&config);

        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_database(), Some("x"));
        assert_eq!(opts.get_username(), "y");
        assert!(format!("{:?}", opts).contains("\"z-s3cret\""));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connect_error() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        };

        let err = fetch_version(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Connect { .. }));
        assert!(err.to_string().contains("127.0.0.1:1/demodb1"));
    }
}
