//! Input management system
//!
//! The engine core only consumes the [`InputSource`] capability: a
//! synchronous query for whether a logical key is currently held. The
//! windowing layer feeds state transitions into an [`InputManager`], which
//! implements that capability. No press/release edges are buffered; only
//! current-frame held-state is observable.

use std::collections::HashSet;

/// Logical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// 0 key
    Num0,
    /// 1 key
    Num1,
    /// 2 key
    Num2,
    /// 3 key
    Num3,
    /// 4 key
    Num4,
    /// 5 key
    Num5,
    /// 6 key
    Num6,
    /// 7 key
    Num7,
    /// 8 key
    Num8,
    /// 9 key
    Num9,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Capability for querying current-frame input state
pub trait InputSource {
    /// Check whether a logical key is currently held
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Check whether a mouse button is currently held
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;
}

/// Held-state input store fed by the windowing layer
#[derive(Debug, Default)]
pub struct InputManager {
    keys: HashSet<Key>,
    mouse_buttons: HashSet<MouseButton>,
}

impl InputManager {
    /// Create a new input manager with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn set_key_pressed(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Record a mouse button press or release
    pub fn set_mouse_button_pressed(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    /// Release every held key and button
    pub fn clear(&mut self) {
        self.keys.clear();
        self.mouse_buttons.clear();
    }
}

impl InputSource for InputManager {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_held_state() {
        let mut input = InputManager::new();
        assert!(!input.is_key_pressed(Key::W));

        input.set_key_pressed(Key::W, true);
        assert!(input.is_key_pressed(Key::W));
        assert!(!input.is_key_pressed(Key::S));

        input.set_key_pressed(Key::W, false);
        assert!(!input.is_key_pressed(Key::W));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut input = InputManager::new();
        input.set_key_pressed(Key::Space, false);
        assert!(!input.is_key_pressed(Key::Space));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputManager::new();
        input.set_key_pressed(Key::A, true);
        input.set_mouse_button_pressed(MouseButton::Left, true);

        input.clear();
        assert!(!input.is_key_pressed(Key::A));
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
    }
}
