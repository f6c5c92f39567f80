//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// JWT secret for token signing and verification
    pub jwt_secret: String,

    /// Load the demo catalog into an empty store on startup
    pub seed_catalog: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!("JWT_SECRET not set, using the insecure development default");
                "change-me-in-production".to_string()
            }),

            seed_catalog: env::var("SEED_CATALOG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        })
    }
}
