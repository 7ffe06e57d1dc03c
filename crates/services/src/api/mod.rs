mod client;
mod config;

pub use client::{AinstienApi, ApiClient};
pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL};
