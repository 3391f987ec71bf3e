//! Combat: health/lifecycle components and the collision resolver.
//!
//! Damage never despawns anything. Rules only flip `LifeState` to `Destroyed`;
//! the registry purge removes those entities at the end of the frame.
//!
//! The resolver runs in `FixedPostUpdate`, which Bevy schedules before
//! `Update`, so it may run zero or several times per frame. See
//! `common::state::TickSet` for the full frame order.

pub mod collision;
pub mod components;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        collision::resolve_collisions
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
