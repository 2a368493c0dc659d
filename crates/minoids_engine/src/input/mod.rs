//! Polled input queries
//!
//! The platform layer answers "is this key down" and "was this key/button just
//! pressed" once per frame. There is no event queue.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key codes the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// P key
    P,
    /// S key
    S,
    /// W key
    W,
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Per-frame input queries consumed by the input system
pub trait InputSource {
    /// Whether `key` is currently held
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Whether `key` went down this frame
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Whether `button` went down this frame
    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool;
}

/// Key bindings used by the input system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    /// Push left
    pub left: KeyCode,
    /// Push right
    pub right: KeyCode,
    /// Push up
    pub up: KeyCode,
    /// Push down
    pub down: KeyCode,
    /// Fire the weapon
    pub fire: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            up: KeyCode::Up,
            down: KeyCode::Down,
            fire: KeyCode::Space,
        }
    }
}

/// Polled input state for one frame.
///
/// Backends (or scripted drivers in tests and the headless demo) feed key and
/// button transitions in, then call [`InputSnapshot::begin_frame`] before the
/// next batch so "just pressed" only lasts one frame.
#[derive(Debug, Default, Clone)]
pub struct InputSnapshot {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
}

impl InputSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget this frame's edge-triggered presses, keeping held keys
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.buttons_pressed.clear();
    }

    /// Handle a key transition
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Handle a mouse button transition
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_pressed.insert(button);
        }
    }
}

impl InputSource for InputSnapshot {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }
}
