//! Custom error types for type-safe error handling
//!
//! Threshold validation failures are not errors in this sense: they are
//! returned as data in [`crate::gauge::ValidationResult`]. The types here
//! cover lookups, configuration and logging setup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::inventory::IngredientId;

// ============================================================================
// Inventory Error
// ============================================================================

/// Errors from mutating the ingredient collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No ingredient with this id exists in the collection
    #[error("no ingredient with id {0}")]
    UnknownIngredient(IngredientId),
}

// ============================================================================
// Config Error
// ============================================================================

/// Errors from loading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but lies outside its allowed range
    #[error("invalid config {path}: display.bar_width = {value} is outside {min}..={max}")]
    BarWidthOutOfRange {
        path: PathBuf,
        value: u16,
        min: usize,
        max: usize,
    },

    /// Example config could not be written
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Log Error
// ============================================================================

/// Errors from installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// Log directory or file could not be created
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `--log-level` / config level is not a valid filter directive
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    /// A global subscriber was already installed
    #[error("logger already initialized")]
    AlreadyInitialized,
}

// ============================================================================
// Result type aliases
// ============================================================================

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for logger setup
pub type LogResult<T> = Result<T, LogError>;
