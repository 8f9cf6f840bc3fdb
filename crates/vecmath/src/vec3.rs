//! Three-dimensional vector operations.
//!
//! Cross products for any [`Scalar`] width, and point transformation of a
//! [`Vector3d`] by a [`Matrix4d`].

use vecmath_core::Scalar;

use crate::mat4::Matrix4d;
use crate::vector::{Vector, Vector3d};

impl<T: Scalar> Vector<T, 3> {
    /// Sets this vector to the right-handed cross product `a × b`.
    ///
    /// All three results are computed before any component is written.
    ///
    /// ```rust
    /// use vecmath::Vector3d;
    ///
    /// let mut z = Vector3d::zero();
    /// z.cross(&Vector3d::X, &Vector3d::Y);
    /// assert_eq!(z, Vector3d::Z);
    /// ```
    #[inline]
    pub fn cross(&mut self, a: &Self, b: &Self) -> &mut Self {
        let x = a.y() * b.z() - a.z() * b.y();
        let y = a.z() * b.x() - a.x() * b.z();
        let z = a.x() * b.y() - a.y() * b.x();
        self.set_xyz(x, y, z)
    }

    /// Returns `self × other` without modifying either operand.
    #[inline]
    #[must_use]
    pub fn crossed(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        out.cross(self, other);
        out
    }
}

impl Vector3d {
    /// Transforms this vector as a point by `m`, with perspective divide.
    ///
    /// The vector is treated as the column `(x, y, z, 1)`; the result of
    /// `m * p` is divided by its `w` component.
    ///
    /// ```rust
    /// use vecmath::{Matrix4d, Vector3d};
    ///
    /// let mut m = Matrix4d::identity();
    /// m.set_translation(1.0, 2.0, 3.0);
    ///
    /// let mut p = Vector3d::new(1.0, 1.0, 1.0);
    /// p.mul_mat4(&m);
    /// assert_eq!(p, Vector3d::new(2.0, 3.0, 4.0));
    /// ```
    pub fn mul_mat4(&mut self, m: &Matrix4d) -> &mut Self {
        let (x, y, z) = (self.x(), self.y(), self.z());
        let inv_w = 1.0 / (m.m30 * x + m.m31 * y + m.m32 * z + m.m33);
        let rx = (m.m00 * x + m.m01 * y + m.m02 * z + m.m03) * inv_w;
        let ry = (m.m10 * x + m.m11 * y + m.m12 * z + m.m13) * inv_w;
        let rz = (m.m20 * x + m.m21 * y + m.m22 * z + m.m23) * inv_w;
        self.set_xyz(rx, ry, rz)
    }
}
