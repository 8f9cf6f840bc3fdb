//! # vecmath-core
//!
//! Foundation types shared by the vecmath crates.
//!
//! - [`Error`], [`Result`] - Checked export and configuration failures
//! - [`VecmathConfig`], [`Environment`] - Diagnostics and equality toggles
//! - [`Scalar`] - Component abstraction over `f32` and `f64`
//!
//! ## Crate Structure
//!
//! ```text
//! vecmath-core (this crate)
//!    ^
//!    |
//!    +-- vecmath (vectors, Matrix4d, transforms)
//!    +-- vecmath-tests (integration tests)
//!    +-- vecmath-bench (benchmarks)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod scalar;

pub use config::*;
pub use error::*;
pub use scalar::Scalar;

/// Prelude module for convenient imports.
///
/// ```
/// use vecmath_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Environment, VecmathConfig};
    pub use crate::error::{Error, Result};
    pub use crate::scalar::Scalar;
}
