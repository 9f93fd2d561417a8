use std::time::Duration;

use axum::http::HeaderValue;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// `DATABASE_URL` which must always be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from the `CORS_ORIGINS` env var.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, credentials disabled.
    Any,
    /// An explicit allow-list; credentials are allowed.
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse a `CORS_ORIGINS` value: either `*` alone or a comma-separated
    /// list of origins. Blank entries are dropped.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.contains(&"*") {
            if entries.len() > 1 {
                return Err("`*` cannot be combined with explicit origins".to_string());
            }
            return Ok(Self::Any);
        }

        entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| format!("invalid origin '{origin}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

/// Connection settings for the backing Postgres store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection string.
    pub url: String,
    /// Pool size (default: `15`).
    pub max_connections: u32,
    /// How long to wait for a pooled connection, in seconds (default: `10`).
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `DATABASE_URL`            | *(required)*               |
    /// | `DB_MAX_CONNECTIONS`      | `15`                       |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `10`                       |
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `8000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`    |
    ///
    /// `CORS_ORIGINS=*` allows every origin without credentials.
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    ///
    /// Panics on missing or malformed values; misconfiguration should stop
    /// the process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = CorsOrigins::parse(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        )
        .unwrap_or_else(|e| panic!("CORS_ORIGINS is invalid: {e}"));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "15".into())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            connect_timeout_secs: std::env::var("DB_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .expect("DB_CONNECT_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
        }
    }
}
