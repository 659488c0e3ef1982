//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Defaults use WASD
//! for movement with the arrow keys as an alternative, the left mouse button
//! to fire, Escape to quit and F11 to toggle debug mode.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

/// Pointer position in screen pixels and primary button state.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    pub primary_down: bool,
    pub primary_binding: MouseButton,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            primary_down: false,
            primary_binding: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
    /// Set when the window is closed or the back action is pressed.
    pub quit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
            quit_requested: false,
        }
    }
}

impl InputState {
    /// Raw (not normalized) movement vector, each axis in `-1..=1`.
    pub fn movement_vector(&self) -> Vector2 {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
        Vector2 {
            x: axis(
                self.maindirection_left.active || self.secondarydirection_left.active,
                self.maindirection_right.active || self.secondarydirection_right.active,
            ),
            y: axis(
                self.maindirection_up.active || self.secondarydirection_up.active,
                self.maindirection_down.active || self.secondarydirection_down.active,
            ),
        }
    }

    /// Whether the fire action is held this frame.
    pub fn fire_held(&self) -> bool {
        self.pointer.primary_down
    }
}
