// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flycam")]
#[command(about = "First-person camera over a field of rotating cubes", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Movement speed in world units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse sensitivity in degrees per pixel
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Cube face image, relative to the scene's resource root
    #[arg(long, value_name = "PATH")]
    pub texture: Option<PathBuf>,

    /// Leave the cursor visible and free instead of capturing it
    #[arg(long = "no-grab")]
    pub no_grab: bool,

    /// Present without waiting for vertical sync
    #[arg(long = "no-vsync")]
    pub no_vsync: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}
