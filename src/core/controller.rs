use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - a snapshot of input state for one frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Mouse displacement accumulated since the previous sample.
    /// Positive y means the cursor moved toward the top of the screen.
    fn mouse_offset(&self) -> Vec2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyA);
        set.insert(Button::KeyW);

        assert!(set.contains(&Button::KeyW));
        assert!(!set.contains(&Button::KeyS));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_button_serde_names() {
        let json = serde_json::to_string(&Button::KeyD).unwrap();
        assert_eq!(json, "\"KeyD\"");

        let parsed: Button = serde_json::from_str("\"MouseLeft\"").unwrap();
        assert_eq!(parsed, Button::MouseLeft);
    }

    #[test]
    fn test_unknown_button_rejected() {
        let parsed: Result<Button, _> = serde_json::from_str("\"KeyZ\"");
        assert!(parsed.is_err());
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
        offset: Vec2,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn mouse_offset(&self) -> Vec2 {
            self.offset
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::Space],
            offset: Vec2::ZERO,
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Space));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_controller_mouse_offset() {
        let controller = MockController {
            pressed: vec![],
            offset: Vec2::new(3.0, -2.0),
        };

        assert_eq!(controller.mouse_offset(), Vec2::new(3.0, -2.0));
        assert!(controller.get_down_keys().is_empty());
    }
}
