use anyhow::{anyhow, Result};
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use flycam::app::App;
use flycam::cli::Cli;
use flycam::config::AppConfig;
use flycam::resources::ResourceManager;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    config.validate()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let resources = ResourceManager::from_config(&config.scene)?;

    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {}", e))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config, resources);

    log::info!("Controls: WASD to move, mouse to look, click to recapture cursor, Escape to quit");
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop failed: {}", e))?;

    Ok(())
}
