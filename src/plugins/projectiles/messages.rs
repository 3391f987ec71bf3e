//! Buffered spawn requests.
//!
//! Producers (player controller, enemy fire) only write intent; the consumer is
//! the single writer that creates projectile entities and appends them to the
//! registry.

use bevy::prelude::*;

use crate::plugins::combat::components::Faction;

/// `pos` and `vel` are in world space.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectile {
    pub faction: Faction,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
}
