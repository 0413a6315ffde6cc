//! Input source seam and the edge-tracking state behind it
//!
//! The platform layer feeds raw events into [`InputState`]; the frame driver
//! reads it once per tick through [`InputSource`] and then calls
//! [`InputState::end_tick`] to clear the press/release edges.

use std::collections::HashSet;

use glam::Vec2;

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Middle,
}

impl Button {
    fn slot(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Middle => 2,
        }
    }
}

/// Keys the scenes react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
}

/// Read-only view of the input for one tick
pub trait InputSource {
    /// Pointer position in scene pixels
    fn pointer_position(&self) -> Vec2;
    fn is_button_just_pressed(&self, button: Button) -> bool;
    fn is_button_down(&self, button: Button) -> bool;
    fn is_button_just_released(&self, button: Button) -> bool;
    fn is_key_down(&self, key: Key) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    down: bool,
    pressed: bool,
    released: bool,
}

/// Accumulated input between two ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Vec2,
    buttons: [ButtonState; 3],
    keys: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn press_button(&mut self, button: Button) {
        let state = &mut self.buttons[button.slot()];
        if !state.down {
            state.pressed = true;
        }
        state.down = true;
    }

    pub fn release_button(&mut self, button: Button) {
        let state = &mut self.buttons[button.slot()];
        if state.down {
            state.released = true;
        }
        state.down = false;
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    /// Drop everything held, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for button in [Button::Left, Button::Right, Button::Middle] {
            self.release_button(button);
        }
        self.keys.clear();
    }

    /// Forget this tick's press/release edges; held state carries over
    pub fn end_tick(&mut self) {
        for state in &mut self.buttons {
            state.pressed = false;
            state.released = false;
        }
    }
}

impl InputSource for InputState {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn is_button_just_pressed(&self, button: Button) -> bool {
        self.buttons[button.slot()].pressed
    }

    fn is_button_down(&self, button: Button) -> bool {
        self.buttons[button.slot()].down
    }

    fn is_button_just_released(&self, button: Button) -> bool {
        self.buttons[button.slot()].released
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_hold_release_edges() {
        let mut input = InputState::new();
        input.press_button(Button::Left);
        assert!(input.is_button_just_pressed(Button::Left));
        assert!(input.is_button_down(Button::Left));
        assert!(!input.is_button_just_released(Button::Left));

        input.end_tick();
        assert!(!input.is_button_just_pressed(Button::Left));
        assert!(input.is_button_down(Button::Left));

        input.release_button(Button::Left);
        assert!(input.is_button_just_released(Button::Left));
        assert!(!input.is_button_down(Button::Left));

        input.end_tick();
        assert!(!input.is_button_just_released(Button::Left));
    }

    #[test]
    fn test_press_and_release_within_one_tick() {
        let mut input = InputState::new();
        input.press_button(Button::Left);
        input.release_button(Button::Left);
        assert!(input.is_button_just_pressed(Button::Left));
        assert!(input.is_button_just_released(Button::Left));
        assert!(!input.is_button_down(Button::Left));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut input = InputState::new();
        input.press_button(Button::Right);
        input.end_tick();
        input.press_button(Button::Right);
        assert!(!input.is_button_just_pressed(Button::Right));
        assert!(!input.is_button_just_pressed(Button::Left));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.press_button(Button::Left);
        input.press_key(Key::Up);
        input.end_tick();

        input.release_all();
        assert!(input.is_button_just_released(Button::Left));
        assert!(!input.is_button_just_released(Button::Middle));
        assert!(!input.is_key_down(Key::Up));
    }

    #[test]
    fn test_keys_and_pointer() {
        let mut input = InputState::new();
        input.move_pointer(Vec2::new(3.0, 4.0));
        input.press_key(Key::Left);
        input.press_key(Key::Down);
        input.release_key(Key::Left);
        assert_eq!(input.pointer_position(), Vec2::new(3.0, 4.0));
        assert!(!input.is_key_down(Key::Left));
        assert!(input.is_key_down(Key::Down));
    }
}
