//! Layered configuration: files, then `ESPORTS__*` environment variables

mod app_config;

pub use app_config::{ApiConfig, AppConfig, LogFormat, LoggingConfig, SessionConfig};
