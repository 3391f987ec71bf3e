//! Global state machine and per-tick ordering.

use bevy::prelude::*;

/// Top-level scenes. The only transition is `MainMenu -> InGame`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    InGame,
}

/// Gameplay ordering inside `Update`.
///
/// ```text
/// Spawn -> Input -> Control -> Advance
/// ```
///
/// Frame order as Bevy schedules it:
///
/// ```text
/// FixedPostUpdate (0..n runs)  resolve_collisions   pairs from the last physics step
/// Update                       Spawn -> Input -> Control -> Advance
/// PostUpdate                   purge_destroyed
/// ```
///
/// So resolution sees positions advanced by the previous frame, and anything it
/// destroys is purged in the same frame. A frame with no fixed step resolves
/// nothing; the `CollisionStart` buffer carries the pairs to the next step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Spawn,
    Input,
    Control,
    Advance,
}

pub fn configure_tick_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (TickSet::Spawn, TickSet::Input, TickSet::Control, TickSet::Advance)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}
