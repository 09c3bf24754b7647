use crate::core::Result;

use super::{env_or, env_parse};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            env_or("SERVER_HOST", "127.0.0.1"),
            env_parse("SERVER_PORT", "3001")?,
        );

        if let Some(workers) = super::env_opt("SERVER_WORKERS") {
            config.workers = workers.parse().map_err(|_| {
                crate::core::AppError::configuration("Invalid SERVER_WORKERS")
            })?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Request handling is CPU-light; one worker per core is plenty.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
