use glam::{Mat4, Vec3};

use crate::config::{ProjectionConfig, SceneConfig};
use crate::types::{InstanceRaw, Vertex};

// ============================================================================
// Cube mesh
// ============================================================================

/// Unit cube centred on the origin, two triangles per face, no index buffer
pub const CUBE_VERTICES: [Vertex; 36] = [
    // back
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0]),
    // front
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    // left
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [1.0, 0.0]),
    // right
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    // bottom
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 1.0]),
    // top
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0]),
];

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Each cube starts rotated by this many degrees times its index
pub const ANGLE_STEP_DEGREES: f32 = 20.0;

// ============================================================================
// Cube field
// ============================================================================

/// A fixed set of cubes, each spinning about the same tilted axis
#[derive(Debug, Clone)]
pub struct CubeField {
    positions: Vec<Vec3>,
    axis: Vec3,
    spin_degrees_per_second: f32,
}

impl CubeField {
    pub fn new(positions: Vec<Vec3>, spin_degrees_per_second: f32) -> Self {
        Self {
            positions,
            axis: Vec3::new(1.0, 0.3, 0.5).normalize(),
            spin_degrees_per_second,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(CUBE_POSITIONS.to_vec(), config.spin_degrees_per_second)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rotation of cube `index` at `time` seconds, in degrees
    pub fn angle_degrees(&self, index: usize, time: f32) -> f32 {
        ANGLE_STEP_DEGREES * index as f32 + self.spin_degrees_per_second * time
    }

    /// translate(position) * rotate(axis, angle)
    pub fn model_matrix(&self, index: usize, time: f32) -> Mat4 {
        let angle = self.angle_degrees(index, time).to_radians();
        Mat4::from_translation(self.positions[index]) * Mat4::from_axis_angle(self.axis, angle)
    }

    pub fn instances(&self, time: f32) -> Vec<InstanceRaw> {
        (0..self.positions.len())
            .map(|i| InstanceRaw::from(self.model_matrix(i, time)))
            .collect()
    }
}

impl Default for CubeField {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Perspective projection with a 0..1 depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl Projection {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y_degrees,
            near,
            far,
            aspect: 1.0,
        };
        projection.resize(width, height);
        projection
    }

    pub fn from_config(config: &ProjectionConfig, width: u32, height: u32) -> Self {
        Self::new(config.fov_degrees, config.near, config.far, width, height)
    }

    /// Zero sizes (minimised window) keep the previous aspect ratio
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_vertices_span_unit_cube() {
        for v in CUBE_VERTICES.iter() {
            for c in v.position {
                assert!(c == 0.5 || c == -0.5);
            }
            for t in v.tex_coords {
                assert!(t == 0.0 || t == 1.0);
            }
        }
    }

    #[test]
    fn angle_grows_with_index_and_time() {
        let field = CubeField::new(CUBE_POSITIONS.to_vec(), 10.0);
        assert_eq!(field.angle_degrees(0, 0.0), 0.0);
        assert_eq!(field.angle_degrees(3, 0.0), 60.0);
        assert_eq!(field.angle_degrees(3, 2.0), 80.0);
    }

    #[test]
    fn first_cube_without_spin_is_identity() {
        let field = CubeField::new(CUBE_POSITIONS.to_vec(), 0.0);
        let model = field.model_matrix(0, 123.0);
        assert!(model.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn projection_resize_ignores_zero() {
        let mut projection = Projection::new(45.0, 0.1, 100.0, 800, 600);
        assert!((projection.aspect() - 800.0 / 600.0).abs() < 1e-6);

        projection.resize(0, 600);
        assert!((projection.aspect() - 800.0 / 600.0).abs() < 1e-6);

        projection.resize(1000, 500);
        assert_eq!(projection.aspect(), 2.0);
    }

    #[test]
    fn projection_depth_range_is_zero_to_one() {
        let projection = Projection::new(45.0, 0.1, 100.0, 640, 480);
        let m = projection.matrix();

        let near = m.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-5, "near maps to {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-5, "far maps to {}", far.z);
    }
}
