use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod business;
pub mod invoice;
pub mod server;

pub use business::{BankDetails, BusinessProfile};
pub use invoice::InvoiceDefaults;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub invoice: InvoiceDefaults,
    pub business: BusinessProfile,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env_or("APP_ENV", "development"),
                log_level: env_or("LOG_LEVEL", "info"),
            },
            server: ServerConfig::from_env()?,
            invoice: InvoiceDefaults::from_env()?,
            business: BusinessProfile::from_env(),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        self.invoice.validate()?;

        if self.business.name.trim().is_empty() {
            return Err(AppError::configuration("BUSINESS_NAME cannot be empty"));
        }

        Ok(())
    }
}

/// Reads `key`, falling back to `default` when unset.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads `key`, treating unset and blank values alike.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads and parses `key`, falling back to `default` when unset.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: &str) -> Result<T> {
    env_or(key, default)
        .trim()
        .parse()
        .map_err(|_| AppError::configuration(format!("Invalid {}", key)))
}
