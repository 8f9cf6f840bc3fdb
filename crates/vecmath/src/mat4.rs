//! 4x4 double-precision matrix.
//!
//! [`Matrix4d`] holds sixteen named fields `mRC` (row `R`, column `C`) and
//! is used to build and compose 3D transforms.
//!
//! # Convention
//!
//! Row-major wherever order is visible, with **column vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |
//! | m10 m11 m12 m13 | * | y |
//! | m20 m21 m22 m23 |   | z |
//! | m30 m31 m32 m33 |   | 1 |
//! ```
//!
//! - [`Matrix4d::new`] and [`Matrix4d::set_elements`] take arguments row by row.
//! - [`Matrix4d::to_array`] and [`Matrix4d::write_to_slice`] emit row by row.
//! - Translation lives in `m03`, `m13`, `m23`.
//!
//! [`Matrix4d::to_cols_array`] is the one explicit exception, for
//! column-major consumers such as `glam` or GL uniform uploads.
//!
//! # Usage
//!
//! ```rust
//! use vecmath::{Matrix4d, Vector3d};
//!
//! let mut model = Matrix4d::identity();
//! model.translate(0.0, 1.0, 0.0).rotate_y(std::f64::consts::FRAC_PI_2).scale_uniform(2.0);
//!
//! let p = model * Vector3d::new(1.0, 0.0, 0.0);
//! assert!((p.z() + 2.0).abs() < 1e-12);
//! ```

use std::ops;

use vecmath_core::{Error, Result};

use crate::vector::Vector3d;

/// A 4x4 double-precision matrix.
///
/// Defaults to the identity. All mutators work in place and return
/// `&mut Self` so transform steps chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix4d {
    /// Row 0, column 0
    pub m00: f64,
    /// Row 0, column 1
    pub m01: f64,
    /// Row 0, column 2
    pub m02: f64,
    /// Row 0, column 3
    pub m03: f64,
    /// Row 1, column 0
    pub m10: f64,
    /// Row 1, column 1
    pub m11: f64,
    /// Row 1, column 2
    pub m12: f64,
    /// Row 1, column 3
    pub m13: f64,
    /// Row 2, column 0
    pub m20: f64,
    /// Row 2, column 1
    pub m21: f64,
    /// Row 2, column 2
    pub m22: f64,
    /// Row 2, column 3
    pub m23: f64,
    /// Row 3, column 0
    pub m30: f64,
    /// Row 3, column 1
    pub m31: f64,
    /// Row 3, column 2
    pub m32: f64,
    /// Row 3, column 3
    pub m33: f64,
}

impl Matrix4d {
    /// Number of scalars in a flat export.
    pub const COMPONENTS: usize = 16;

    /// All-zero matrix. Never the default.
    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from components given row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: f64, m01: f64, m02: f64, m03: f64,
        m10: f64, m11: f64, m12: f64, m13: f64,
        m20: f64, m21: f64, m22: f64, m23: f64,
        m30: f64, m31: f64, m32: f64, m33: f64,
    ) -> Self {
        Self {
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        }
    }

    /// The identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(r: [[f64; 4]; 4]) -> Self {
        Self::new(
            r[0][0], r[0][1], r[0][2], r[0][3],
            r[1][0], r[1][1], r[1][2], r[1][3],
            r[2][0], r[2][1], r[2][2], r[2][3],
            r[3][0], r[3][1], r[3][2], r[3][3],
        )
    }

    /// Creates a matrix from a column-major flat array.
    #[inline]
    pub const fn from_cols_array(a: &[f64; 16]) -> Self {
        Self::new(
            a[0], a[4], a[8], a[12],
            a[1], a[5], a[9], a[13],
            a[2], a[6], a[10], a[14],
            a[3], a[7], a[11], a[15],
        )
    }

    /// Returns the rows as arrays.
    #[inline]
    pub const fn rows(&self) -> [[f64; 4]; 4] {
        [
            [self.m00, self.m01, self.m02, self.m03],
            [self.m10, self.m11, self.m12, self.m13],
            [self.m20, self.m21, self.m22, self.m23],
            [self.m30, self.m31, self.m32, self.m33],
        ]
    }

    /// Returns the columns as arrays.
    #[inline]
    pub const fn cols(&self) -> [[f64; 4]; 4] {
        [
            [self.m00, self.m10, self.m20, self.m30],
            [self.m01, self.m11, self.m21, self.m31],
            [self.m02, self.m12, self.m22, self.m32],
            [self.m03, self.m13, self.m23, self.m33],
        ]
    }

    /// Returns an independent copy.
    #[inline]
    #[must_use]
    pub fn dup(&self) -> Self {
        *self
    }

    /// Copies all components from `other`.
    #[inline]
    pub fn set(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Overwrites all components, given row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn set_elements(
        &mut self,
        m00: f64, m01: f64, m02: f64, m03: f64,
        m10: f64, m11: f64, m12: f64, m13: f64,
        m20: f64, m21: f64, m22: f64, m23: f64,
        m30: f64, m31: f64, m32: f64, m33: f64,
    ) -> &mut Self {
        *self = Self::new(
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        );
        self
    }

    /// Resets this matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        self.set(&Self::IDENTITY)
    }

    /// Exact component-wise equality (no epsilon), compared row by row.
    #[rustfmt::skip]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.m00 == other.m00 && self.m01 == other.m01 && self.m02 == other.m02 && self.m03 == other.m03 &&
        self.m10 == other.m10 && self.m11 == other.m11 && self.m12 == other.m12 && self.m13 == other.m13 &&
        self.m20 == other.m20 && self.m21 == other.m21 && self.m22 == other.m22 && self.m23 == other.m23 &&
        self.m30 == other.m30 && self.m31 == other.m31 && self.m32 == other.m32 && self.m33 == other.m33
    }

    /// Row-major flat array.
    #[inline]
    pub fn to_array(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        self.write_to_slice(&mut out, 0);
        out
    }

    /// Column-major flat array, for `glam` and GL-style consumers.
    #[inline]
    pub fn to_cols_array(&self) -> [f64; 16] {
        let c = self.cols();
        [
            c[0][0], c[0][1], c[0][2], c[0][3],
            c[1][0], c[1][1], c[1][2], c[1][3],
            c[2][0], c[2][1], c[2][2], c[2][3],
            c[3][0], c[3][1], c[3][2], c[3][3],
        ]
    }

    /// Writes the components row by row into `target` starting at `offset`.
    ///
    /// Elements outside `offset..offset + 16` are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `target` is shorter than `offset + 16`.
    pub fn write_to_slice<'a>(&self, target: &'a mut [f64], offset: usize) -> &'a mut [f64] {
        let out = &mut target[offset..offset + Self::COMPONENTS];
        for (chunk, row) in out.chunks_exact_mut(4).zip(self.rows()) {
            chunk.copy_from_slice(&row);
        }
        target
    }

    /// Checked variant of [`Matrix4d::write_to_slice`].
    pub fn try_write_to_slice<'a>(
        &self,
        target: &'a mut [f64],
        offset: usize,
    ) -> Result<&'a mut [f64]> {
        match offset.checked_add(Self::COMPONENTS) {
            Some(end) if end <= target.len() => Ok(self.write_to_slice(target, offset)),
            _ => Err(Error::buffer_too_small(Self::COMPONENTS, target.len(), offset)),
        }
    }

    /// Diagnostic rendering on one line, rows separated by ` | `.
    ///
    /// ```rust
    /// use vecmath::Matrix4d;
    ///
    /// assert_eq!(
    ///     Matrix4d::identity().as_string(),
    ///     "(1.0, 0.0, 0.0, 0.0 | 0.0, 1.0, 0.0, 0.0 | 0.0, 0.0, 1.0, 0.0 | 0.0, 0.0, 0.0, 1.0)"
    /// );
    /// ```
    pub fn as_string(&self) -> String {
        let rows: Vec<String> = self.rows().iter().map(|r| join(r, ", ")).collect();
        format!("({})", rows.join(" | "))
    }

    /// One row per line, components separated by spaces.
    pub fn as_row_major_string(&self) -> String {
        let lines: Vec<String> = self.rows().iter().map(|r| join(r, " ")).collect();
        lines.join("\n")
    }

    /// One column per line, components separated by spaces.
    pub fn as_column_major_string(&self) -> String {
        let lines: Vec<String> = self.cols().iter().map(|c| join(c, " ")).collect();
        lines.join("\n")
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

fn join(values: &[f64; 4], sep: &str) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    parts.join(sep)
}

impl Default for Matrix4d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix4d * Matrix4d
impl ops::Mul for Matrix4d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::product(&self, &rhs)
    }
}

// Matrix4d * point
impl ops::Mul<Vector3d> for Matrix4d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: Vector3d) -> Vector3d {
        let mut p = rhs;
        p.mul_mat4(&self);
        p
    }
}

impl From<[[f64; 4]; 4]> for Matrix4d {
    #[inline]
    fn from(rows: [[f64; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Matrix4d> for [[f64; 4]; 4] {
    #[inline]
    fn from(m: Matrix4d) -> Self {
        m.rows()
    }
}

impl From<glam::DMat4> for Matrix4d {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Self::from_cols_array(&m.to_cols_array())
    }
}

impl From<Matrix4d> for glam::DMat4 {
    #[inline]
    fn from(m: Matrix4d) -> Self {
        glam::DMat4::from_cols_array(&m.to_cols_array())
    }
}
