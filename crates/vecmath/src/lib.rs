//! # vecmath
//!
//! Allocation-free vectors and a 4x4 transform matrix.
//!
//! - [`Vector2d`], [`Vector3d`], [`Vector4d`], [`Vector3f`] - Fixed-size vectors
//! - [`Matrix4d`] - 4x4 double matrix with transform and camera builders
//! - [`Structural`] - Config-aware equality, hashing and rendering
//!
//! # Design
//!
//! Every operation mutates in place and returns `&mut Self`, so a transform
//! is built as a chain of calls on one value. Matrices are **row-major**
//! wherever order is visible and act on **column vectors**:
//!
//! ```text
//! p' = M * p
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vecmath::{Matrix4d, Vector3d};
//!
//! let eye = Vector3d::new(0.0, 2.0, 5.0);
//! let mut view_proj = Matrix4d::identity();
//! view_proj
//!     .set_perspective(std::f64::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0)
//!     .look_at(&eye, &Vector3d::zero(), &Vector3d::Y);
//!
//! let ndc = view_proj * Vector3d::zero();
//! assert!(ndc.x().abs() < 1e-12);
//!
//! let mut gpu = [0.0f32; 16];
//! for (dst, src) in gpu.iter_mut().zip(view_proj.to_cols_array()) {
//!     *dst = src as f32;
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`vecmath_core`] - Errors, config, scalar trait
//! - [`glam`] - Conversions to and from glam types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat4;
mod object;
mod projection;
mod transform;
mod vec3;
mod vector;

pub use mat4::*;
pub use object::*;
pub use vector::*;

pub use vecmath_core::{Environment, Error, Result, Scalar, VecmathConfig};

/// Prelude module for convenient imports.
///
/// ```
/// use vecmath::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mat4::Matrix4d;
    pub use crate::object::Structural;
    pub use crate::vector::{Vec3f, Vector, Vector2d, Vector3d, Vector3f, Vector4d};
    pub use vecmath_core::prelude::*;
}
