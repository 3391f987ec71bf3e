//! Feature plugins.

use bevy::prelude::*;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod menu;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod registry;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    registry::plugin(app);
    world::plugin(app);
    menu::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    projectiles::plugin(app);
    combat::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    lighting::plugin(app);
}
