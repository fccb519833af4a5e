//! Configuration for gh-pr-chores
//!
//! This crate provides:
//! - The `AppConfig` value object handed to every command
//! - `.env` and process environment resolution
//! - Optional TOML config file loading
//! - The `RepositoryId` (`owner/name`) type

pub mod app_config;
pub mod config_file;
pub mod error;
pub mod paths;
pub mod repository;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, ConfigFile};
pub use error::ConfigError;
pub use repository::RepositoryId;
