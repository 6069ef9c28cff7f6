use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{
    KeyBindings, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVEMENT_SPEED, DEFAULT_PITCH, DEFAULT_YAW,
};
use crate::cli::Cli;

const WORLD_UP_TOLERANCE: f32 = 1e-4;

/// Top-level configuration. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Hide and capture the cursor; mouse look then uses raw motion
    pub grab_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "flycam".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            grab_cursor: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    /// Degrees
    pub pitch: f32,
    /// Degrees
    pub yaw: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub bindings: KeyBindings,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            pitch: DEFAULT_PITCH,
            yaw: DEFAULT_YAW,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            bindings: KeyBindings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spin_degrees_per_second: f32,
    /// Directory that texture paths are relative to
    pub resource_root: PathBuf,
    /// Cube face image; a generated checkerboard when unset
    pub texture: Option<PathBuf>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spin_degrees_per_second: 10.0,
            resource_root: PathBuf::from("resources"),
            texture: None,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse config JSON")
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if let Some(speed) = cli.speed {
            self.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(fov) = cli.fov {
            self.projection.fov_degrees = fov;
        }
        if cli.no_grab {
            self.window.grab_cursor = false;
        }
        if cli.no_vsync {
            self.window.vsync = false;
        }
        if let Some(texture) = &cli.texture {
            self.scene.texture = Some(texture.clone());
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!(
                "window size must be non-zero, got {}x{}",
                self.window.width,
                self.window.height
            );
        }

        let projection = &self.projection;
        if !(projection.fov_degrees > 0.0 && projection.fov_degrees < 180.0) {
            bail!("fov_degrees must be in (0, 180), got {}", projection.fov_degrees);
        }
        if !(projection.near > 0.0) {
            bail!("near plane must be positive, got {}", projection.near);
        }
        if !(projection.far > projection.near) {
            bail!(
                "far plane ({}) must be beyond near plane ({})",
                projection.far,
                projection.near
            );
        }

        let camera = &self.camera;
        if !(camera.movement_speed >= 0.0) {
            bail!("movement_speed must be non-negative, got {}", camera.movement_speed);
        }
        if !(camera.mouse_sensitivity >= 0.0) {
            bail!(
                "mouse_sensitivity must be non-negative, got {}",
                camera.mouse_sensitivity
            );
        }
        // pitch is measured from the XZ plane, so the reference axis must be +Y
        let world_up = glam::Vec3::from_array(camera.world_up);
        if world_up.length_squared() == 0.0 {
            bail!("world_up must not be the zero vector");
        }
        if !world_up.normalize().abs_diff_eq(glam::Vec3::Y, WORLD_UP_TOLERANCE) {
            bail!("world_up must point along +Y, got {:?}", camera.world_up);
        }

        let bindings = camera.bindings.as_array();
        for (i, button) in bindings.iter().enumerate() {
            if bindings[i + 1..].contains(button) {
                bail!("{:?} is bound to more than one movement direction", button);
            }
        }

        Ok(())
    }
}
