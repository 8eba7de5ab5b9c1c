//! # Error Types
//!
//! Errors that can surface from the VITRINE crates. Missing host resources
//! are deliberately NOT errors: effects treat them as silent no-ops.

use thiserror::Error;

/// Errors that can occur while configuring or driving the site.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// A trigger start position could not be parsed (e.g. `"top 85%"`).
    #[error("invalid trigger start position: {0:?}")]
    InvalidStart(String),

    /// A timeline position could not be parsed (e.g. `"-=0.4"`).
    #[error("invalid timeline position: {0:?}")]
    InvalidPosition(String),

    /// Locale code is not one of the supported locales.
    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),

    /// The host refused a clipboard write.
    #[error("clipboard write denied: {reason}")]
    ClipboardDenied {
        /// Reason reported by the host.
        reason: String,
    },

    /// Configuration file has an invalid value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for VITRINE operations.
pub type VitrineResult<T> = Result<T, VitrineError>;
