//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; we call `world.flush()`
//! after running so queued commands are applied before assertions.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Run `f` with a `Commands` bound to `world`, then apply the queue.
pub fn with_commands<T>(world: &mut World, f: impl FnOnce(&mut Commands) -> T) -> T {
    let mut queue = CommandQueue::default();
    let result = {
        let mut commands = Commands::new(&mut queue, world);
        f(&mut commands)
    };
    queue.apply(world);
    result
}

/// Default `Time` advanced by `dt`, as seen by `Res<Time>` in a bare world.
pub fn time_with_delta(dt: Duration) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(dt);
    t
}

/// `Time<Real>` whose last update advanced by `dt`.
///
/// The first real-clock update only records the instant, so it is primed first.
pub fn real_time_with_delta(dt: Duration) -> Time<Real> {
    let mut t = Time::<Real>::default();
    t.update_with_duration(Duration::ZERO);
    t.update_with_duration(dt);
    t
}

/// Inject a collision report between two colliders (no rigid bodies).
pub fn write_collision_start(world: &mut World, a: Entity, b: Entity) {
    if world.get_resource::<Messages<CollisionStart>>().is_none() {
        world.init_resource::<Messages<CollisionStart>>();
    }
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: None,
        body2: None,
    });
}
