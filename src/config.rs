use serde::Deserialize;
use std::env;

use crate::constants::{DEFAULT_GUESSES_ALLOWED, MAX_GUESSES_ALLOWED, MIN_GUESSES_ALLOWED};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Database (in-memory store when unset)
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Game
    pub default_guesses_allowed: i32,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            database_url: env::var("DATABASE_URL").ok(),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,

            default_guesses_allowed: env::var("DEFAULT_GUESSES_ALLOWED")
                .unwrap_or_else(|_| DEFAULT_GUESSES_ALLOWED.to_string())
                .parse()?,

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(url) = &self.database_url {
            if url.trim().is_empty() {
                anyhow::bail!("DATABASE_URL is set but empty");
            }
        }
        if !(MIN_GUESSES_ALLOWED..=MAX_GUESSES_ALLOWED).contains(&self.default_guesses_allowed) {
            anyhow::bail!(
                "DEFAULT_GUESSES_ALLOWED must be between {} and {}",
                MIN_GUESSES_ALLOWED,
                MAX_GUESSES_ALLOWED
            );
        }
        if self.database_max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be positive");
        }

        if self.database_url.is_none() {
            tracing::warn!("DATABASE_URL not set, games are kept in memory only");
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        environment: "development".to_string(),
        database_url: None,
        database_max_connections: 1,
        default_guesses_allowed: DEFAULT_GUESSES_ALLOWED,
        cors_allowed_origins: "*".to_string(),
    }
}
