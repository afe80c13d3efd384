//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AssignmentConfig, ConfigError, DatabaseConfig, Environment,
    ServerConfig,
};
