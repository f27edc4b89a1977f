//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, NeochatConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
