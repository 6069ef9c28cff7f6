use glam::Vec2;
use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Where mouse look deltas come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    /// Differences between successive cursor positions (cursor free)
    Cursor,
    /// Raw device motion (cursor captured)
    Raw,
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    mode: MouseMode,
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last cursor position, None until the first sample arrives
    last_cursor: Option<Vec2>,
    /// Mouse offset accumulated since last reset, y already flipped
    mouse_offset: Vec2,
}

impl WinitController {
    pub fn new(mode: MouseMode) -> Self {
        Self {
            mode,
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            last_cursor: None,
            mouse_offset: Vec2::ZERO,
        }
    }

    pub fn mode(&self) -> MouseMode {
        self.mode
    }

    /// Switch mouse source. The next cursor sample is treated as the first.
    pub fn set_mode(&mut self, mode: MouseMode) {
        if self.mode != mode {
            self.mode = mode;
            self.last_cursor = None;
            self.mouse_offset = Vec2::ZERO;
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_state(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } if self.mode == MouseMode::Cursor => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                self.last_cursor = None;
            }
            _ => {}
        }
    }

    /// Process a Winit DeviceEvent (raw mouse motion)
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.mode == MouseMode::Raw {
                self.raw_motion(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    /// Record a cursor position in window coordinates (y grows downward).
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        let last = self.last_cursor.unwrap_or(pos);

        // reversed because window y runs top to bottom
        self.mouse_offset += Vec2::new(pos.x - last.x, last.y - pos.y);
        self.last_cursor = Some(pos);
    }

    /// Record raw device motion (y grows downward).
    pub fn raw_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_offset += Vec2::new(dx, -dy);
    }

    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Reset per-frame state (mouse offset)
    /// Call this at the end of each frame after the camera consumed it
    pub fn reset_deltas(&mut self) {
        self.mouse_offset = Vec2::ZERO;
    }

    /// Last known cursor position, if any
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.last_cursor
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new(MouseMode::Raw)
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_offset(&self) -> Vec2 {
        self.mouse_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Events carrying a DeviceId need winit's unsafe dummy id; those paths
    // are driven through the adapter's own methods instead.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new(MouseMode::Cursor);
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.cursor_position(), None);
        assert_eq!(controller.mouse_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_first_cursor_sample_has_no_offset() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.cursor_moved(400.0, 300.0);

        assert_eq!(controller.mouse_offset(), Vec2::ZERO);
        assert_eq!(controller.cursor_position(), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_cursor_offset_reverses_y() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.cursor_moved(100.0, 100.0);
        // right and up on screen
        controller.cursor_moved(110.0, 95.0);

        assert_eq!(controller.mouse_offset(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_cursor_offset_accumulates_until_reset() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.cursor_moved(0.0, 0.0);
        controller.cursor_moved(3.0, 0.0);
        controller.cursor_moved(5.0, 4.0);
        assert_eq!(controller.mouse_offset(), Vec2::new(5.0, -4.0));

        controller.reset_deltas();
        assert_eq!(controller.mouse_offset(), Vec2::ZERO);

        controller.cursor_moved(6.0, 4.0);
        assert_eq!(controller.mouse_offset(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_raw_motion_reverses_y() {
        let mut controller = WinitController::new(MouseMode::Raw);
        controller.raw_motion(2.0, -3.0);
        controller.raw_motion(1.0, 1.0);

        assert_eq!(controller.mouse_offset(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_focus_loss_releases_buttons_and_cursor() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.press(Button::KeyW);
        controller.press(Button::MouseLeft);
        controller.cursor_moved(200.0, 150.0);

        controller.process_event(&WindowEvent::Focused(false));

        assert!(controller.get_down_keys().is_empty());
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.cursor_position(), None);

        // first sample after refocus does not jump
        controller.process_event(&WindowEvent::Focused(true));
        controller.cursor_moved(900.0, 20.0);
        assert_eq!(controller.mouse_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_focus_gain_keeps_state() {
        let mut controller = WinitController::default();
        controller.press(Button::KeyD);
        controller.process_event(&WindowEvent::Focused(true));
        assert!(controller.is_down(Button::KeyD));
    }

    #[test]
    fn test_device_motion_in_raw_mode() {
        let mut controller = WinitController::new(MouseMode::Raw);
        controller.process_device_event(&DeviceEvent::MouseMotion { delta: (4.0, 2.5) });
        controller.process_device_event(&DeviceEvent::MouseMotion { delta: (-1.0, -0.5) });

        assert_eq!(controller.mouse_offset(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_device_motion_ignored_in_cursor_mode() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.process_device_event(&DeviceEvent::MouseMotion { delta: (12.0, -7.0) });

        assert_eq!(controller.mouse_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_set_mode_forgets_cursor() {
        let mut controller = WinitController::new(MouseMode::Cursor);
        controller.cursor_moved(10.0, 10.0);
        controller.set_mode(MouseMode::Raw);
        assert_eq!(controller.cursor_position(), None);

        controller.set_mode(MouseMode::Cursor);
        controller.cursor_moved(500.0, 500.0);
        assert_eq!(controller.mouse_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::default();
        controller.press(Button::KeyW);
        controller.press(Button::KeyW);
        controller.press(Button::KeyD);

        assert_eq!(controller.get_down_keys(), &[Button::KeyW, Button::KeyD]);

        controller.release(Button::KeyW);
        assert!(!controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::KeyD));

        controller.release_all();
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyA), Some(Button::KeyA));
        assert_eq!(WinitController::keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyZ), None);
        assert_eq!(
            WinitController::mouse_button_to_button(MouseButton::Middle),
            None
        );
    }
}
