//! Logical key bindings.
//!
//! `KeyCode` values are physical key positions, so the default W/A/S/D block
//! is Z/Q/S/D on an AZERTY keyboard.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub shoot: KeyCode,
    pub confirm: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            shoot: KeyCode::Space,
            confirm: KeyCode::Space,
        }
    }
}
