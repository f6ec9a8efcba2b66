//! Shared types, error model, and configuration for profilegen.
//!
//! This crate is the foundation depended on by all other profilegen crates.
//! It provides:
//! - [`ProfileGenError`]: the unified error type
//! - Domain types ([`ProfileRecord`], [`ToolId`], [`ToolCatalog`])
//! - Configuration ([`AppConfig`], [`RenderConfig`], config and settings persistence)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, RemoteConfig, RenderConfig, SettingKey, SettingValue, config_dir,
    config_file_path, init_config, load_config, load_config_from, load_settings_from,
    save_settings_to,
};
pub use error::{ProfileGenError, Result};
pub use types::{ProfileRecord, ToolCatalog, ToolId};
