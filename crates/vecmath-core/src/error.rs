//! Error types for vecmath operations.
//!
//! Arithmetic never fails: NaN and infinity propagate per IEEE-754. The
//! variants here cover the few checked surfaces the library offers:
//!
//! - Checked flat-buffer export ([`Error::BufferTooSmall`])
//! - Configuration parsing ([`Error::InvalidSetting`])
//! - Test-only configuration overrides ([`Error::ProductionLocked`])
//!
//! # Usage
//!
//! ```rust
//! use vecmath_core::{Error, Result};
//!
//! fn check_len(len: usize, offset: usize) -> Result<()> {
//!     if len < offset + 16 {
//!         return Err(Error::buffer_too_small(offset + 16, len, offset));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_len(10, 0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vecmath.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Target buffer cannot hold the exported components.
    ///
    /// Returned by the `try_write_to_slice` family when
    /// `offset + components > len`.
    #[error("buffer of length {len} cannot hold {required} components at offset {offset}")]
    BufferTooSmall {
        /// Components that need to be written
        required: usize,
        /// Length of the target buffer
        len: usize,
        /// Requested start offset
        offset: usize,
    },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for setting {name}")]
    InvalidSetting {
        /// Setting (environment variable) name
        name: String,
        /// Raw value that failed to parse
        value: String,
    },

    /// A test-only override was attempted on a production config.
    #[error("unable to change {setting} as vecmath is in production mode")]
    ProductionLocked {
        /// Setting that was being changed
        setting: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, len: usize, offset: usize) -> Self {
        Self::BufferTooSmall {
            required,
            len,
            offset,
        }
    }

    /// Creates an [`Error::InvalidSetting`] error.
    #[inline]
    pub fn invalid_setting(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an [`Error::ProductionLocked`] error.
    #[inline]
    pub fn production_locked(setting: &'static str) -> Self {
        Self::ProductionLocked { setting }
    }

    /// Returns `true` if this is a buffer export error.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidSetting { .. } | Self::ProductionLocked { .. })
    }
}
