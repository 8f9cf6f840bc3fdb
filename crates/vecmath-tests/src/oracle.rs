//! Cross-checks against `glam::DMat4`.
//!
//! Every transform builder is compared with the equivalent glam
//! construction. glam stores columns, so comparisons go through
//! `Matrix4d::from(DMat4)` and the row-major accessors.

use glam::{DMat4, DVec3};
use vecmath::{Matrix4d, Vector3d};

/// Tolerance for matrices built along different arithmetic paths.
const EPSILON: f64 = 1e-12;

fn assert_matches(ours: &Matrix4d, theirs: DMat4) {
    let theirs = Matrix4d::from(theirs);
    for (i, (a, b)) in ours.to_array().iter().zip(theirs.to_array().iter()).enumerate() {
        assert!(
            (a - b).abs() <= EPSILON * b.abs().max(1.0),
            "element {} (row {}, col {}): {} != {}\nours:\n{}\nglam:\n{}",
            i,
            i / 4,
            i % 4,
            a,
            b,
            ours.as_row_major_string(),
            theirs.as_row_major_string()
        );
    }
}

/// A non-trivial starting matrix so composition order is exercised.
fn base() -> (Matrix4d, DMat4) {
    let mut ours = Matrix4d::identity();
    ours.translate(0.5, -1.0, 2.0).rotate_z(0.25).scale(1.0, 2.0, 3.0);
    let theirs = DMat4::from_translation(DVec3::new(0.5, -1.0, 2.0))
        * DMat4::from_rotation_z(0.25)
        * DMat4::from_scale(DVec3::new(1.0, 2.0, 3.0));
    (ours, theirs)
}

#[test]
fn test_base_matches() {
    let (ours, theirs) = base();
    assert_matches(&ours, theirs);
}

#[test]
fn test_set_translation_matches() {
    let mut ours = Matrix4d::identity();
    ours.set_translation(3.0, -4.0, 5.0);
    assert_matches(&ours, DMat4::from_translation(DVec3::new(3.0, -4.0, 5.0)));
}

#[test]
fn test_translate_matches() {
    let (mut ours, theirs) = base();
    ours.translate(1.0, 2.0, 3.0);
    assert_matches(&ours, theirs * DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn test_scale_matches() {
    let (mut ours, theirs) = base();
    ours.scale(2.0, 0.5, -1.0);
    assert_matches(&ours, theirs * DMat4::from_scale(DVec3::new(2.0, 0.5, -1.0)));

    let mut ours = Matrix4d::identity();
    ours.set_scale(2.0, 3.0, 4.0);
    assert_matches(&ours, DMat4::from_scale(DVec3::new(2.0, 3.0, 4.0)));
}

#[test]
fn test_rotations_match() {
    for angle in [-2.5, -0.3, 0.0, 0.7, 1.9, std::f64::consts::PI] {
        let (mut ours, theirs) = base();
        ours.rotate_x(angle);
        assert_matches(&ours, theirs * DMat4::from_rotation_x(angle));

        let (mut ours, theirs) = base();
        ours.rotate_y(angle);
        assert_matches(&ours, theirs * DMat4::from_rotation_y(angle));

        let (mut ours, theirs) = base();
        ours.rotate_z(angle);
        assert_matches(&ours, theirs * DMat4::from_rotation_z(angle));
    }
}

#[test]
fn test_multiply_matches() {
    let (a, ga) = base();
    let mut b = Matrix4d::identity();
    b.rotate_x(1.1).translate(-3.0, 0.0, 1.0);
    let gb = DMat4::from_rotation_x(1.1) * DMat4::from_translation(DVec3::new(-3.0, 0.0, 1.0));

    let mut ours = a;
    ours.multiply(&b);
    assert_matches(&ours, ga * gb);
    assert_matches(&Matrix4d::product(&b, &a), gb * ga);
}

#[test]
fn test_perspective_matches() {
    let cases = [
        (std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0),
        (std::f64::consts::FRAC_PI_3, 16.0 / 9.0, 0.5, 50.0),
        (0.2, 0.75, 1.0, 2.0),
    ];
    for (fov, aspect, near, far) in cases {
        let mut ours = Matrix4d::identity();
        ours.set_perspective(fov, aspect, near, far);
        assert_matches(&ours, DMat4::perspective_rh_gl(fov, aspect, near, far));
    }
}

#[test]
fn test_look_at_matches() {
    let cases = [
        (DVec3::new(0.0, 10.0, 10.0), DVec3::new(10.0, 10.0, 10.0), DVec3::Y),
        (DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO, DVec3::Y),
        (DVec3::new(-4.0, 0.5, 7.0), DVec3::new(1.0, 1.0, -1.0), DVec3::new(0.0, 0.0, 1.0)),
    ];
    for (eye, center, up) in cases {
        let mut ours = Matrix4d::identity();
        ours.look_at(&eye.into(), &center.into(), &up.into());
        assert_matches(&ours, DMat4::look_at_rh(eye, center, up));
    }
}

#[test]
fn test_view_projection_matches() {
    let eye = DVec3::new(3.0, 4.0, 5.0);
    let mut ours = Matrix4d::identity();
    ours.set_perspective(1.0, 1.5, 0.1, 100.0)
        .look_at(&eye.into(), &Vector3d::zero(), &Vector3d::Y);
    let theirs = DMat4::perspective_rh_gl(1.0, 1.5, 0.1, 100.0)
        * DMat4::look_at_rh(eye, DVec3::ZERO, DVec3::Y);
    assert_matches(&ours, theirs);
}

#[test]
fn test_point_projection_matches() {
    let (m, g) = base();
    let mut proj = Matrix4d::identity();
    proj.set_perspective(1.2, 1.0, 0.1, 10.0).multiply(&m);
    let gproj = DMat4::perspective_rh_gl(1.2, 1.0, 0.1, 10.0) * g;

    for p in [
        DVec3::new(0.0, 0.0, -1.0),
        DVec3::new(0.3, -0.2, -2.5),
        DVec3::new(-1.0, 1.0, -4.0),
    ] {
        let ours = proj * Vector3d::from(p);
        let theirs = gproj.project_point3(p);
        for (a, b) in ours.to_array().iter().zip(theirs.to_array().iter()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }
}

#[test]
fn test_column_major_export_matches() {
    let (ours, theirs) = base();
    let cols = ours.to_cols_array();
    for (a, b) in cols.iter().zip(theirs.to_cols_array().iter()) {
        assert!((a - b).abs() < EPSILON);
    }
}
