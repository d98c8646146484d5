//! Environment-driven configuration, read once at startup.

/// Default CORS allow-list: the development front-end origins (Vite default
/// port).
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
    &["http://localhost:5173", "http://127.0.0.1:5173"];

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings for the HTTP listener and cross-origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Origins permitted by the CORS layer (`ALLOWED_ORIGINS`,
    /// comma-separated).
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Read configuration from the environment, falling back to dev defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
            tracing::info!("BIND_ADDR not set; using {DEFAULT_BIND_ADDR}");
            defaults.bind_addr.clone()
        });

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origin_list(&raw),
            Err(_) => defaults.allowed_origins.clone(),
        };

        Self {
            bind_addr,
            allowed_origins,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
