//! Error types for icon lookup and file loading

use thiserror::Error;

/// Errors raised while resolving which icon to render
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// Neither inline icon data nor a lookup name was supplied
    #[error("no icon provided")]
    MissingIconInput,

    /// No icon is registered under the requested name
    #[error("no icon registered for name '{name}'")]
    UnknownIconName { name: String },
}

/// Errors that can occur when loading icon sets or option files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
