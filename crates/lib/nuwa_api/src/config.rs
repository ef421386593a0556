//! API server configuration.

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Origins allowed by CORS. `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable          | Default                                |
    /// |-------------------|----------------------------------------|
    /// | `BIND_ADDR`       | `$HOST:$PORT`, else `127.0.0.1:3000`   |
    /// | `HOST`            | `127.0.0.1`                            |
    /// | `PORT`            | `3000`                                 |
    /// | `ALLOWED_ORIGINS` | any origin                             |
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
            let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
            format!("{host}:{port}")
        });
        Self {
            bind_addr,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .ok()
                .and_then(|v| parse_origins(&v)),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            allowed_origins: None,
        }
    }
}

/// Split a comma separated origin list. Blank lists mean "any origin".
pub fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() { None } else { Some(origins) }
}
