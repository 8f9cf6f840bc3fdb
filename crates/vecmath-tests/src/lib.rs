//! Integration tests for vecmath crates.
//!
//! This crate contains end-to-end tests that exercise `vecmath` and
//! `vecmath-core` together through their public APIs only.

#[cfg(test)]
mod oracle;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use vecmath::prelude::*;

    /// Camera pipeline: model -> view -> projection -> NDC.
    #[test]
    fn test_camera_pipeline() {
        let mut model = Matrix4d::identity();
        model.translate(0.0, 0.0, -5.0).rotate_y(0.5).scale_uniform(2.0);

        let mut view_proj = Matrix4d::identity();
        view_proj
            .set_perspective(std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0)
            .look_at(&Vector3d::zero(), &Vector3d::new(0.0, 0.0, -1.0), &Vector3d::Y);

        let mut mvp = view_proj;
        mvp.multiply(&model);

        // model origin sits on the view axis
        let ndc = mvp * Vector3d::zero();
        assert_abs_diff_eq!(ndc.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ndc.y(), 0.0, epsilon = 1e-12);
        assert!(ndc.z() > -1.0 && ndc.z() < 1.0);
    }

    #[test]
    fn test_chained_transform_matches_stepwise() {
        let mut chained = Matrix4d::identity();
        chained.translate(1.0, 2.0, 3.0).rotate_x(0.3).rotate_z(-1.2).scale(2.0, 1.0, 0.5);

        let mut stepwise = Matrix4d::identity();
        let mut step = Matrix4d::identity();
        step.set_translation(1.0, 2.0, 3.0);
        stepwise.multiply(&step);
        step.set_identity().rotate_x(0.3);
        stepwise.multiply(&step);
        step.set_identity().rotate_z(-1.2);
        stepwise.multiply(&step);
        step.set_scale(2.0, 1.0, 0.5);
        stepwise.multiply(&step);

        for (a, b) in chained.to_array().iter().zip(stepwise.to_array().iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_roundtrip() {
        let mut m = Matrix4d::identity();
        m.translate(1.0, 2.0, 3.0).rotate_y(1.0);
        m.set_identity();
        assert!(Matrix4d::default().is_equal_to(&m));
    }

    #[test]
    fn test_gpu_buffer_upload() {
        let mut m = Matrix4d::identity();
        m.set_translation(7.0, 8.0, 9.0);
        let v = Vector3d::new(1.0, 2.0, 3.0);

        // [matrix | vector] packed into one buffer
        let mut buffer = vec![0.0; Matrix4d::COMPONENTS + Vector3d::DIMENSION];
        m.write_to_slice(&mut buffer, 0);
        v.write_to_slice(&mut buffer, Matrix4d::COMPONENTS);
        assert_eq!(buffer[3], 7.0);
        assert_eq!(&buffer[16..], &[1.0, 2.0, 3.0]);

        let err = v.try_write_to_slice(&mut buffer, 17).unwrap_err();
        assert!(err.is_buffer_error());
    }

    #[test]
    fn test_vector_geometry_with_matrix() {
        let a = Vector3d::new(1.0, 0.0, 0.0);
        let b = Vector3d::new(0.0, 1.0, 0.0);
        let normal = a.crossed(&b);
        assert_eq!(normal, Vector3d::Z);
        assert_abs_diff_eq!(a.angle(&b), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        let mut m = Matrix4d::identity();
        m.rotate_x(std::f64::consts::FRAC_PI_2);
        let rotated = m * normal;
        assert_abs_diff_eq!(rotated.y(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.z(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_glam_interop() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        let back: Vec3f = g.into();
        assert_eq!(back, v);

        let d: glam::DVec4 = Vector4d::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(d.w, 4.0);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let mut config = VecmathConfig::development();
        config.set_object_equals(true).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"development\""));
        let back: VecmathConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: VecmathConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VecmathConfig::production());

        let config: VecmathConfig =
            serde_json::from_str(r#"{"environment":"development","debug_to_string":true}"#).unwrap();
        assert_eq!(config.environment(), Environment::Development);
        assert!(config.is_debug_to_string_enabled());
        assert!(!config.is_object_equals_enabled());

        assert!(serde_json::from_str::<VecmathConfig>(r#"{"environment":"staging"}"#).is_err());
    }

    #[test]
    fn test_config_json_missing_flags_follow_environment() {
        let from_json: VecmathConfig =
            serde_json::from_str(r#"{"environment":"development"}"#).unwrap();
        let from_env = VecmathConfig::from_lookup(|name| {
            (name == vecmath_core::ENV_ENVIRONMENT).then(|| "development".to_string())
        })
        .unwrap();
        assert_eq!(from_json, from_env);
        assert!(from_json.is_debug_to_string_enabled());
        assert!(!from_json.is_object_equals_enabled());

        let config: VecmathConfig =
            serde_json::from_str(r#"{"environment":"production","object_equals":true}"#).unwrap();
        assert!(!config.is_debug_to_string_enabled());
        assert!(config.is_object_equals_enabled());

        let config: VecmathConfig =
            serde_json::from_str(r#"{"environment":"development","debug_to_string":false}"#)
                .unwrap();
        assert!(!config.is_debug_to_string_enabled());
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct ViewerSettings {
        fov_y: f64,
        #[serde(default)]
        vecmath: VecmathConfig,
    }

    #[test]
    fn test_config_embedded_in_settings() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{"fov_y":1.0,"vecmath":{"environment":"development"}}"#)
                .unwrap();
        assert_eq!(settings.fov_y, 1.0);
        assert_eq!(settings.vecmath, VecmathConfig::development());

        let settings: ViewerSettings = serde_json::from_str(r#"{"fov_y":0.5}"#).unwrap();
        assert_eq!(settings.vecmath, VecmathConfig::production());

        let json = serde_json::to_string(&settings).unwrap();
        let back: ViewerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vecmath, settings.vecmath);
    }

    #[test]
    fn test_structural_semantics_by_config() {
        let mut config = VecmathConfig::development();
        let a = Matrix4d::identity();
        let b = Matrix4d::identity();

        assert!(!a.equals(&b, &config));
        assert_ne!(a.hash_code(&config), b.hash_code(&config));
        config.set_object_equals(true).unwrap();
        assert!(a.equals(&b, &config));
        assert_eq!(a.hash_code(&config), b.hash_code(&config));

        config.set_debug_to_string(false).unwrap();
        assert!(a.render(&config).starts_with("Matrix4d@"));
    }
}
