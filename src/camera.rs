use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;
use crate::core::{Button, Controller};

pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

/// Pitch limit in degrees; looking straight up or down would flip the basis.
pub const MAX_PITCH: f32 = 89.0;

/// Which button drives each movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Button,
    pub backward: Button,
    pub left: Button,
    pub right: Button,
}

impl KeyBindings {
    pub fn as_array(&self) -> [Button; 4] {
        [self.forward, self.backward, self.left, self.right]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: Button::KeyW,
            backward: Button::KeyS,
            left: Button::KeyA,
            right: Button::KeyD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per unit of mouse offset
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

/// First-person camera driven by Euler angles (degrees).
///
/// `front`, `right` and `up` are always derived from `pitch`, `yaw` and
/// `world_up`; they are never set directly.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    pitch: f32,
    yaw: f32,
    settings: CameraSettings,
    bindings: KeyBindings,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, pitch: f32, yaw: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up: world_up.normalize(),
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
            yaw,
            settings: CameraSettings::default(),
            bindings: KeyBindings::default(),
        };
        camera.update_vectors();
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            Vec3::from_array(config.position),
            Vec3::from_array(config.world_up),
            config.pitch,
            config.yaw,
        )
        .with_settings(CameraSettings {
            movement_speed: config.movement_speed,
            mouse_sensitivity: config.mouse_sensitivity,
        })
        .with_bindings(config.bindings)
    }

    pub fn with_settings(mut self, settings: CameraSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn movement_speed(&self) -> f32 {
        self.settings.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.settings.mouse_sensitivity
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Apply one frame of input: move along the current basis, then turn.
    pub fn update(&mut self, input: &dyn Controller, elapsed_seconds: f32) {
        debug_assert!(elapsed_seconds >= 0.0, "negative frame delta");

        let velocity = self.settings.movement_speed * elapsed_seconds;
        if input.is_down(self.bindings.forward) {
            self.position += self.front * velocity;
        }
        if input.is_down(self.bindings.backward) {
            self.position -= self.front * velocity;
        }
        if input.is_down(self.bindings.left) {
            self.position -= self.right * velocity;
        }
        if input.is_down(self.bindings.right) {
            self.position += self.right * velocity;
        }

        let offset = input.mouse_offset();
        if offset != glam::Vec2::ZERO {
            let offset = offset * self.settings.mouse_sensitivity;
            self.yaw += offset.x;
            self.pitch = (self.pitch + offset.y).clamp(-MAX_PITCH, MAX_PITCH);
        }

        self.update_vectors();
    }

    /// Right-handed look-at transform, column-major.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());

        self.front = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
            .normalize();
        // cross product length shrinks near the poles; renormalize so strafing keeps its speed
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_PITCH, DEFAULT_YAW)
    }
}
