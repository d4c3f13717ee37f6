//! Core utilities and types shared across all otuvec crates

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{OtuError, OtuResult};
pub use config::{
    Config, GroupsConfig, LogFormat, LoggingConfig, OutputConfig, OutputFormat, load_config,
    save_config,
};
pub use logging::init_logging;

/// Version information for the otuvec project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
