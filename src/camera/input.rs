use std::collections::HashSet;

use glam::Vec2;

use crate::camera::core::{Camera, MoveDirection};
use crate::input::{InputEvent, Key};

/// Translates input events into camera operations.
///
/// Key state is tracked as a held-key set and applied once per frame via
/// [`Self::apply_movement`], so simultaneous keys produce additive
/// (diagonal) motion. Cursor movement drives mouse look directly; the
/// first cursor event only establishes a reference position so the camera
/// does not jump when the cursor enters the window.
pub struct InputHandler {
    pressed: HashSet<Key>,
    last_mouse_pos: Option<Vec2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler with no keys held and no cursor reference yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            last_mouse_pos: None,
        }
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns true if the event was consumed by the camera.
    pub fn handle_event(
        &mut self,
        camera: &mut Camera,
        event: &InputEvent,
    ) -> bool {
        match *event {
            InputEvent::Key { key, pressed } => {
                if pressed {
                    let _ = self.pressed.insert(key);
                } else {
                    let _ = self.pressed.remove(&key);
                }
                matches!(key, Key::W | Key::A | Key::S | Key::D)
            }
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                if let Some(last) = self.last_mouse_pos {
                    let delta = current - last;
                    // Window y grows downward; camera pitch grows upward.
                    camera.process_mouse_movement(delta.x, -delta.y, true);
                }
                self.last_mouse_pos = Some(current);
                true
            }
            InputEvent::Scroll { delta } => {
                camera.process_mouse_scroll(delta);
                true
            }
        }
    }

    /// Apply held movement keys for this frame. One call per held WASD key
    /// so diagonal movement is the sum of two translations.
    pub fn apply_movement(&self, camera: &mut Camera, dt: f32) {
        if self.is_pressed(Key::W) {
            camera.process_keyboard(MoveDirection::Forward, dt);
        }
        if self.is_pressed(Key::S) {
            camera.process_keyboard(MoveDirection::Backward, dt);
        }
        if self.is_pressed(Key::A) {
            camera.process_keyboard(MoveDirection::Left, dt);
        }
        if self.is_pressed(Key::D) {
            camera.process_keyboard(MoveDirection::Right, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn first_cursor_event_only_sets_the_reference() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let yaw_before = camera.yaw();

        let consumed = handler.handle_event(
            &mut camera,
            &InputEvent::CursorMoved { x: 400.0, y: 300.0 },
        );
        assert!(consumed);
        assert!((camera.yaw() - yaw_before).abs() < EPS);

        // Second event rotates by the delta.
        let _ = handler.handle_event(
            &mut camera,
            &InputEvent::CursorMoved { x: 410.0, y: 300.0 },
        );
        assert!(
            (camera.yaw() - (yaw_before + 10.0 * camera.mouse_sensitivity))
                .abs()
                < EPS
        );
    }

    #[test]
    fn upward_cursor_motion_pitches_up() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let _ = handler.handle_event(
            &mut camera,
            &InputEvent::CursorMoved { x: 0.0, y: 100.0 },
        );
        // Cursor moving toward the top of the window (decreasing y).
        let _ = handler.handle_event(
            &mut camera,
            &InputEvent::CursorMoved { x: 0.0, y: 40.0 },
        );
        assert!(camera.pitch() > 0.0);
    }

    #[test]
    fn held_keys_move_until_released() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let start = camera.position;

        let _ = handler.handle_event(
            &mut camera,
            &InputEvent::Key {
                key: Key::W,
                pressed: true,
            },
        );
        handler.apply_movement(&mut camera, 0.1);
        assert!((camera.position - start).length() > 0.0);

        let moved = camera.position;
        let _ = handler.handle_event(
            &mut camera,
            &InputEvent::Key {
                key: Key::W,
                pressed: false,
            },
        );
        handler.apply_movement(&mut camera, 0.1);
        assert!((camera.position - moved).length() < EPS);
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let start = camera.position;

        for key in [Key::W, Key::S] {
            let _ = handler.handle_event(
                &mut camera,
                &InputEvent::Key { key, pressed: true },
            );
        }
        handler.apply_movement(&mut camera, 0.25);
        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn scroll_zooms_in() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let _ = handler
            .handle_event(&mut camera, &InputEvent::Scroll { delta: 5.0 });
        assert!(camera.zoom() < 45.0);
    }

    #[test]
    fn model_keys_are_tracked_but_not_consumed() {
        let mut handler = InputHandler::new();
        let mut camera = Camera::default();
        let consumed = handler.handle_event(
            &mut camera,
            &InputEvent::Key {
                key: Key::Space,
                pressed: true,
            },
        );
        assert!(!consumed);
        assert!(handler.is_pressed(Key::Space));
    }
}
