//! Runtime configuration from environment variables.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Base for absolute URLs in `Location` headers.
    pub public_base_url: String,
}

impl Config {
    /// Read config from the environment, with local-development defaults.
    /// `PUBLIC_BASE_URL` falls back to the bind address.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/bistro".into()),
            bind_addr,
            public_base_url,
        }
    }
}
