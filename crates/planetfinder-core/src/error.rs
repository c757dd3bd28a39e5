//! Unified error handling for Planet Finder
//!
//! This module provides a single error type covering all failure modes
//! across the Planet Finder crates: fatal catalog load errors and
//! recoverable filter validation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all Planet Finder operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Load Errors ====================

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data file not found
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    /// Catalog data file could not be parsed
    #[error("Malformed catalog: {message}")]
    MalformedCatalog { message: String },

    /// Galaxy configuration is unusable (e.g. non-positive scale)
    #[error("Invalid galaxy config: {message}")]
    InvalidConfig { message: String },

    // ==================== Validation Errors ====================

    /// Filter specified no tiers at all
    #[error("at least one tier required")]
    EmptyTierFilter,

    /// Filter named a tier outside the valid range
    #[error("tier {tier} outside valid range {min}-{max}")]
    TierOutOfRange { tier: u8, min: u8, max: u8 },

    /// Distance bound is negative or not a number
    #[error("invalid distance: {value}")]
    InvalidDistance { value: f64 },

    // ==================== General Errors ====================

    /// Custom error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a malformed-catalog error
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedCatalog {
            message: message.into(),
        }
    }

    /// Create an invalid-config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable filter-validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyTierFilter
                | Error::TierOutOfRange { .. }
                | Error::InvalidDistance { .. }
        )
    }

    /// Check if this is a fatal catalog-load error
    pub fn is_load_error(&self) -> bool {
        match self {
            Error::Io(_)
            | Error::CatalogNotFound(_)
            | Error::MalformedCatalog { .. }
            | Error::InvalidConfig { .. } => true,
            Error::WithContext { source, .. } => source.is_load_error(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
