use tessera_core::alloc::HashSet;
use tessera_core::math::Vec2;

use crate::event::{
    ElementState, Event, EventBatch, KeyCode, MouseButton, MouseScrollDelta, PhysicalKey,
};

/// Polled input state, updated from the frame's events.
#[derive(Debug)]
pub struct InputState {
    keys_pressed: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    scroll_delta: Vec2,
    mouse_pos: Vec2,
    mouse_delta: Vec2,
    mouse_visible: bool,
    mouse_in_window: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            keys_pressed: HashSet::new(),
            buttons: HashSet::new(),
            scroll_delta: Vec2::ZERO,
            mouse_pos: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            mouse_visible: true,
            mouse_in_window: true,
        }
    }

    /// Reset per-frame accumulators.
    pub fn new_frame(&mut self) {
        self.scroll_delta = Vec2::ZERO;
        self.mouse_delta = Vec2::ZERO;
    }

    /// Apply every event of a batch without consuming any of them.
    pub fn handle_events(&mut self, events: &EventBatch) {
        for event in events.iter() {
            self.on_event(event);
        }
    }

    pub fn on_event(&mut self, event: &Event) {
        match event {
            Event::KeyInput(event) if !event.repeat => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.keys_pressed.insert(code),
                        ElementState::Released => self.keys_pressed.remove(&code),
                    };
                }
            }
            Event::MouseButtonDown(button) => {
                self.buttons.insert(*button);
            }
            Event::MouseButtonUp(button) => {
                self.buttons.remove(button);
            }
            Event::MouseScrolled(delta) => match delta {
                MouseScrollDelta::LineDelta(x_delta, y_delta) => {
                    const LINE_SCROLL_DELTA: f32 = 10.0;
                    self.scroll_delta += Vec2::new(*x_delta, *y_delta) * LINE_SCROLL_DELTA
                }

                MouseScrollDelta::PixelDelta(delta) => {
                    self.scroll_delta += Vec2::new(delta.x as f32, delta.y as f32)
                }
            },
            Event::MouseMoved(pos) => {
                let new_pos = Vec2::new(pos.x as f32, pos.y as f32);
                self.mouse_delta = new_pos - self.mouse_pos;
                self.mouse_pos = new_pos;
            }
            Event::MouseEntered => self.mouse_in_window = true,
            Event::MouseLeft => self.mouse_in_window = false,
            Event::CursorVisibilityChanged(visible) => self.set_mouse_visible(*visible),
            // Releases outside the window are never reported
            Event::Focused(false) => self.buttons.clear(),
            _ => {}
        }
    }

    /// Show or hide the mouse cursor (e.g. while a viewport grabs it).
    pub fn set_mouse_visible(&mut self, visible: bool) {
        if self.mouse_visible != visible {
            tracing::debug!(visible, "mouse visibility changed");
        }
        self.mouse_visible = visible;
    }

    pub fn is_mouse_visible(&self) -> bool {
        self.mouse_visible
    }

    pub fn is_mouse_in_window(&self) -> bool {
        self.mouse_in_window
    }

    /// Every mouse button currently held.
    pub fn buttons(&self) -> &HashSet<MouseButton> {
        &self.buttons
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn keys_pressed(&self) -> &HashSet<KeyCode> {
        &self.keys_pressed
    }

    pub fn is_key_pressed(&self, code: &KeyCode) -> bool {
        self.keys_pressed.contains(code)
    }

    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::geometry::LogicalPosition;

    #[test]
    fn test_buttons_are_tracked() {
        let mut input = InputState::new();
        input.on_event(&Event::MouseButtonDown(MouseButton::Left));
        input.on_event(&Event::MouseButtonDown(MouseButton::Right));
        assert!(input.is_button_pressed(MouseButton::Left));
        assert_eq!(input.buttons().len(), 2);

        input.on_event(&Event::MouseButtonUp(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Left));
        assert!(input.is_button_pressed(MouseButton::Right));
    }

    #[test]
    fn test_focus_loss_releases_buttons() {
        let mut input = InputState::new();
        input.on_event(&Event::MouseButtonDown(MouseButton::Left));
        input.on_event(&Event::Focused(false));
        assert!(input.buttons().is_empty());
    }

    #[test]
    fn test_mouse_position_and_delta() {
        let mut input = InputState::new();
        input.on_event(&Event::MouseMoved(LogicalPosition::new(10.0, 20.0)));
        input.on_event(&Event::MouseMoved(LogicalPosition::new(15.0, 18.0)));

        assert_eq!(input.mouse_pos(), Vec2::new(15.0, 18.0));
        assert_eq!(input.mouse_delta(), Vec2::new(5.0, -2.0));

        input.new_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_mouse_visibility() {
        let mut input = InputState::new();
        assert!(input.is_mouse_visible());

        input.on_event(&Event::CursorVisibilityChanged(false));
        assert!(!input.is_mouse_visible());

        input.set_mouse_visible(true);
        assert!(input.is_mouse_visible());
    }
}
