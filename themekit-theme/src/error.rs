//! # Theme Error Types
//!
//! Errors raised at the fallible edges of the theming system: loading
//! configuration and selecting theme variants. Applying a theme to an element
//! never fails and has no error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Configuration file was not found.
    #[error("Theme configuration file not found: {path:?}")]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file or string.
    #[error("Failed to parse theme configuration: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse, if it came from a file.
        path: Option<PathBuf>,
        /// Details about the parse error.
        details: String,
    },

    /// Configuration file has an unsupported extension.
    #[error("Unsupported configuration file format {path:?}. Use .toml")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A theme variant was requested that is not registered.
    #[error("Theme variant '{name}' is not registered")]
    UnknownVariant {
        /// The name of the variant.
        name: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a configuration not found error.
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a configuration parse error.
    pub fn parse_error(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path,
            details: details.into(),
        }
    }

    /// Create an unknown variant error.
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }
}
