//! Affine transform construction and composition for [`Matrix4d`].
//!
//! `set_*` methods replace the matrix. The rest post-multiply the current
//! matrix (`M = M * T`), so the last call in a chain is applied to points
//! first:
//!
//! ```rust
//! use vecmath::{Matrix4d, Vector3d};
//!
//! let mut m = Matrix4d::identity();
//! m.translate(5.0, 0.0, 0.0).scale_uniform(2.0);
//!
//! // scaled, then translated
//! assert_eq!(m * Vector3d::new(1.0, 0.0, 0.0), Vector3d::new(7.0, 0.0, 0.0));
//! ```

use crate::mat4::Matrix4d;
use crate::vector::Vector3d;

impl Matrix4d {
    /// Replaces this matrix with a pure translation.
    #[rustfmt::skip]
    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set_elements(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Post-multiplies by a translation, keeping existing rotation and scale.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.m03 = self.m00 * x + self.m01 * y + self.m02 * z + self.m03;
        self.m13 = self.m10 * x + self.m11 * y + self.m12 * z + self.m13;
        self.m23 = self.m20 * x + self.m21 * y + self.m22 * z + self.m23;
        self.m33 = self.m30 * x + self.m31 * y + self.m32 * z + self.m33;
        self
    }

    /// [`Matrix4d::translate`] by the components of `v`.
    #[inline]
    pub fn translate_by(&mut self, v: &Vector3d) -> &mut Self {
        self.translate(v.x(), v.y(), v.z())
    }

    /// Replaces this matrix with a diagonal scale.
    #[rustfmt::skip]
    pub fn set_scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set_elements(
            x, 0.0, 0.0, 0.0,
            0.0, y, 0.0, 0.0,
            0.0, 0.0, z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Replaces this matrix with a uniform scale.
    #[inline]
    pub fn set_uniform_scale(&mut self, k: f64) -> &mut Self {
        self.set_scale(k, k, k)
    }

    /// Post-multiplies by a scale: columns 0, 1, 2 are multiplied by `x`, `y`, `z`.
    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.m00 *= x;
        self.m10 *= x;
        self.m20 *= x;
        self.m30 *= x;
        self.m01 *= y;
        self.m11 *= y;
        self.m21 *= y;
        self.m31 *= y;
        self.m02 *= z;
        self.m12 *= z;
        self.m22 *= z;
        self.m32 *= z;
        self
    }

    /// Post-multiplies by a uniform scale.
    #[inline]
    pub fn scale_uniform(&mut self, k: f64) -> &mut Self {
        self.scale(k, k, k)
    }

    /// Post-multiplies by a right-handed rotation of `angle` radians about X.
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let [_, c1, c2, _] = self.cols();
        let n1 = [0, 1, 2, 3].map(|r| c * c1[r] + s * c2[r]);
        let n2 = [0, 1, 2, 3].map(|r| -s * c1[r] + c * c2[r]);
        self.set_col(1, n1).set_col(2, n2)
    }

    /// Post-multiplies by a right-handed rotation of `angle` radians about Y.
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let [c0, _, c2, _] = self.cols();
        let n0 = [0, 1, 2, 3].map(|r| c * c0[r] - s * c2[r]);
        let n2 = [0, 1, 2, 3].map(|r| s * c0[r] + c * c2[r]);
        self.set_col(0, n0).set_col(2, n2)
    }

    /// Post-multiplies by a right-handed rotation of `angle` radians about Z.
    pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let [c0, c1, _, _] = self.cols();
        let n0 = [0, 1, 2, 3].map(|r| c * c0[r] + s * c1[r]);
        let n1 = [0, 1, 2, 3].map(|r| -s * c0[r] + c * c1[r]);
        self.set_col(0, n0).set_col(1, n1)
    }

    /// Sets `self = self * right`.
    ///
    /// To square a matrix, pass a copy: `m.multiply(&m.dup())`.
    #[inline]
    pub fn multiply(&mut self, right: &Self) -> &mut Self {
        let result = Self::product(self, right);
        self.set(&result)
    }

    /// Returns `left * right`.
    ///
    /// Every source element is loaded before the result is assembled.
    pub fn product(left: &Self, right: &Self) -> Self {
        let a = left.rows();
        let b = right.rows();
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
            }
        }
        Self::from_rows(out)
    }

    fn set_col(&mut self, index: usize, col: [f64; 4]) -> &mut Self {
        match index {
            0 => [self.m00, self.m10, self.m20, self.m30] = col,
            1 => [self.m01, self.m11, self.m21, self.m31] = col,
            2 => [self.m02, self.m12, self.m22, self.m32] = col,
            _ => [self.m03, self.m13, self.m23, self.m33] = col,
        }
        self
    }
}
