pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod texture;
pub mod types;

pub use camera::{Camera, CameraSettings, KeyBindings};
pub use config::AppConfig;
