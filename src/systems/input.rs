//! Input polling.
//!
//! [`update_input_state`] reads hardware input from raylib once per frame,
//! before the simulation schedule runs, and writes the results into
//! [`InputState`]. It also requests the debug toggle via
//! [`SwitchDebugEvent`] when its key is pressed.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

fn poll_key(rl: &RaylibHandle, state: &mut BoolState) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
}

/// Poll raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let toggle_debug = {
        let mut input = world.resource_mut::<InputState>();

        poll_key(rl, &mut input.maindirection_up);
        poll_key(rl, &mut input.maindirection_left);
        poll_key(rl, &mut input.maindirection_down);
        poll_key(rl, &mut input.maindirection_right);
        poll_key(rl, &mut input.secondarydirection_up);
        poll_key(rl, &mut input.secondarydirection_down);
        poll_key(rl, &mut input.secondarydirection_left);
        poll_key(rl, &mut input.secondarydirection_right);
        poll_key(rl, &mut input.action_back);
        poll_key(rl, &mut input.mode_debug);

        input.pointer.position = rl.get_mouse_position();
        let button = input.pointer.primary_binding;
        input.pointer.primary_down = rl.is_mouse_button_down(button);

        if rl.window_should_close() || input.action_back.just_pressed {
            input.quit_requested = true;
        }
        input.mode_debug.just_pressed
    };

    if toggle_debug {
        world.trigger(SwitchDebugEvent {});
    }
}
