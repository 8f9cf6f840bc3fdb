//! Camera matrices: perspective projection and look-at views.
//!
//! Both follow the right-handed, OpenGL-style clip convention (camera looks
//! down `-Z`, depth maps to `[-1, 1]`).

use crate::mat4::Matrix4d;
use crate::vector::Vector3d;

impl Matrix4d {
    /// Replaces this matrix with a symmetric right-handed perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians.
    ///
    /// Arguments are checked with debug assertions only: `0 < fov_y < π`,
    /// `aspect > 0`, finite `z_near` and `z_far`. Release builds produce
    /// garbage output for invalid input.
    ///
    /// ```rust
    /// use vecmath::Matrix4d;
    ///
    /// let mut proj = Matrix4d::identity();
    /// proj.set_perspective(std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    /// assert_eq!(proj.m32, -1.0);
    /// assert_eq!(proj.m33, 0.0);
    /// ```
    pub fn set_perspective(&mut self, fov_y: f64, aspect: f64, z_near: f64, z_far: f64) -> &mut Self {
        debug_assert!(
            fov_y > 0.0 && fov_y < std::f64::consts::PI,
            "fov_y out of range: {fov_y}"
        );
        debug_assert!(aspect > 0.0, "aspect must be positive: {aspect}");
        debug_assert!(
            z_near.is_finite() && z_far.is_finite(),
            "clip planes must be finite: {z_near}, {z_far}"
        );

        let h = (fov_y * 0.5).tan();
        let depth = z_near - z_far;
        self.set_elements(
            1.0 / (h * aspect), 0.0, 0.0, 0.0,
            0.0, 1.0 / h, 0.0, 0.0,
            0.0, 0.0, (z_far + z_near) / depth, 2.0 * z_far * z_near / depth,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Post-multiplies by a right-handed view matrix looking from `eye` at
    /// `center`.
    ///
    /// The view basis is built as
    ///
    /// ```text
    /// dir  = normalize(eye - center)
    /// left = normalize(up × dir)
    /// up'  = dir × left
    /// ```
    ///
    /// with rows `left`, `up'`, `dir` and translation `-(basis · eye)`.
    /// Starting from a projection matrix yields a combined view-projection.
    ///
    /// `eye == center`, or `up` parallel to the view direction, produces NaN
    /// components.
    pub fn look_at(&mut self, eye: &Vector3d, center: &Vector3d, up: &Vector3d) -> &mut Self {
        let mut dir = *eye;
        dir.sub(center).normalize();

        let mut left = Vector3d::zero();
        left.cross(up, &dir).normalize();

        let mut up_n = Vector3d::zero();
        up_n.cross(&dir, &left);

        let view = Matrix4d::new(
            left.x(), left.y(), left.z(), -left.dot(eye),
            up_n.x(), up_n.y(), up_n.z(), -up_n.dot(eye),
            dir.x(), dir.y(), dir.z(), -dir.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        );
        self.multiply(&view)
    }

    /// [`Matrix4d::look_at`] with the three vectors given as scalars.
    #[allow(clippy::too_many_arguments)]
    pub fn look_at_components(
        &mut self,
        eye_x: f64,
        eye_y: f64,
        eye_z: f64,
        center_x: f64,
        center_y: f64,
        center_z: f64,
        up_x: f64,
        up_y: f64,
        up_z: f64,
    ) -> &mut Self {
        self.look_at(
            &Vector3d::new(eye_x, eye_y, eye_z),
            &Vector3d::new(center_x, center_y, center_z),
            &Vector3d::new(up_x, up_y, up_z),
        )
    }
}
