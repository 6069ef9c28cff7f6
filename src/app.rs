use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::config::AppConfig;
use crate::core::{Clock, FpsCounter, MouseMode, WinitController};
use crate::renderer::Renderer;
use crate::resources::ResourceManager;
use crate::scene::{CubeField, Projection};

/// Owns the window, the camera pose and the per-frame input snapshot
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    projection: Projection,
    field: CubeField,
    resources: ResourceManager,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    pub fn new(config: AppConfig, resources: ResourceManager) -> Self {
        let mode = if config.window.grab_cursor {
            MouseMode::Raw
        } else {
            MouseMode::Cursor
        };

        Self {
            camera: Camera::from_config(&config.camera),
            projection: Projection::from_config(
                &config.projection,
                config.window.width,
                config.window.height,
            ),
            field: CubeField::from_config(&config.scene),
            resources,
            controller: WinitController::new(mode),
            clock: Clock::new(),
            fps: FpsCounter::default(),
            window: None,
            renderer: None,
            config,
        }
    }

    /// Hide the cursor and lock it to the window. Falls back to cursor-position
    /// mouse look when the platform refuses both grab modes.
    fn capture_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.controller.set_mode(MouseMode::Raw);
            }
            Err(e) => {
                log::warn!("Could not capture cursor, using cursor position: {}", e);
                self.controller.set_mode(MouseMode::Cursor);
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();

        self.camera.update(&self.controller, frame.delta);
        self.controller.reset_deltas();

        if let Some(fps) = self.fps.record(frame.delta) {
            let p = self.camera.position();
            log::debug!(
                "frame {} | {:.0} FPS | pos ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1}",
                frame.number,
                fps,
                p.x,
                p.y,
                p.z,
                self.camera.yaw(),
                self.camera.pitch()
            );
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.camera, &self.projection, &self.field, frame.time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            &self.field,
            &self.resources,
            self.config.window.vsync,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.projection.resize(size.width, size.height);
        self.window = Some(window);
        self.renderer = Some(renderer);

        if self.config.window.grab_cursor {
            self.capture_cursor();
        }
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.projection.resize(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if self.config.window.grab_cursor => self.capture_cursor(),
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
