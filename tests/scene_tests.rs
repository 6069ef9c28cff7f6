use flycam::camera::Camera;
use flycam::config::{AppConfig, SceneConfig};
use flycam::scene::{CubeField, Projection, CUBE_POSITIONS, CUBE_VERTICES};
use glam::{Mat4, Vec3};

#[cfg(test)]
mod cube_field_tests {
    use super::*;

    #[test]
    fn test_default_field_has_ten_cubes() {
        let field = CubeField::default();
        assert_eq!(field.len(), 10);
        assert!(!field.is_empty());
        assert_eq!(field.instances(0.0).len(), 10);
        assert_eq!(CUBE_VERTICES.len(), 36);
    }

    #[test]
    fn test_model_translation_matches_position() {
        let field = CubeField::from_config(&SceneConfig {
            spin_degrees_per_second: 33.0,
            ..SceneConfig::default()
        });

        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            for time in [0.0, 0.5, 10.0] {
                let model = field.model_matrix(i, time);
                let origin = model.transform_point3(Vec3::ZERO);
                assert!(
                    (origin - *position).length() < 1e-5,
                    "cube {} at t={} is at {:?}",
                    i,
                    time,
                    origin
                );
            }
        }
    }

    #[test]
    fn test_rotation_preserves_cube_size() {
        let field = CubeField::default();
        let model = field.model_matrix(7, 3.25);

        let a = model.transform_point3(Vec3::new(-0.5, -0.5, -0.5));
        let b = model.transform_point3(Vec3::new(0.5, 0.5, 0.5));
        assert!(((a - b).length() - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_spin_changes_orientation_over_time() {
        let field = CubeField::new(vec![Vec3::ZERO], 90.0);
        let early = field.model_matrix(0, 0.0);
        let later = field.model_matrix(0, 1.0);
        assert!(!early.abs_diff_eq(later, 1e-3));
    }

    #[test]
    fn test_instances_match_model_matrices() {
        let field = CubeField::default();
        let instances = field.instances(2.0);
        let model = Mat4::from_cols_array_2d(&instances[4].model);
        assert!(model.abs_diff_eq(field.model_matrix(4, 2.0), 1e-6));
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_cube_in_front_of_default_camera_is_visible() {
        let config = AppConfig::default();
        let camera = Camera::from_config(&config.camera);
        let projection = Projection::from_config(&config.projection, 800, 600);

        let clip = projection.matrix() * camera.view_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let camera = Camera::default();
        let projection = Projection::new(45.0, 0.1, 100.0, 640, 480);

        let clip = projection.matrix() * camera.view_matrix() * Vec3::new(0.0, 0.0, 5.0).extend(1.0);
        assert!(clip.w < 0.0);
    }
}
