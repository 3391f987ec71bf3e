//! Projectiles: message-based spawning, lifetime and bounds.
//!
//! ```text
//! Control  : player controller  --SpawnProjectile-->
//! Advance  : enemy fire         --SpawnProjectile-->  spawn_requested_projectiles
//!                                                          |
//!                                       registry.insert(PlayerProjectiles | EnemyProjectiles)
//! Advance  : advance_projectiles  (lifetime expiry, out-of-field)  -> LifeState::Destroyed
//! ```

pub mod messages;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::{enemy_bullet_layers, player_bullet_layers};
use crate::common::state::{GameState, TickSet};
use crate::common::tunables::Tunables;
use crate::plugins::combat::components::{Faction, LifeState, Lifetime, Projectile};
use crate::plugins::enemies;
use crate::plugins::registry::{Collection, EntityRegistry, ensure_finite, guard_step};

use messages::SpawnProjectile;

/// Projectiles leaving the field by more than this are destroyed.
const BOUNDS_MARGIN: f32 = 16.0;
const RADIUS: f32 = 6.0;

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnProjectile>().add_systems(
        Update,
        (
            advance_projectiles,
            spawn_requested_projectiles.after(enemies::advance_enemies),
        )
            .in_set(TickSet::Advance),
    );
}

/// Create one projectile entity and register it.
pub fn spawn_projectile(
    commands: &mut Commands,
    registry: &mut EntityRegistry,
    tunables: &Tunables,
    req: &SpawnProjectile,
) -> Entity {
    let (name, color, layers) = match req.faction {
        Faction::Player => ("PlayerProjectile", Color::srgb(0.4, 0.95, 1.0), player_bullet_layers()),
        Faction::Enemy => ("EnemyProjectile", Color::srgb(1.0, 0.45, 0.2), enemy_bullet_layers()),
    };

    let e = commands
        .spawn((
            Name::new(name),
            Projectile {
                damage: req.damage,
                faction: req.faction,
            },
            LifeState::Alive,
            Lifetime::from_seconds(tunables.bullet_lifetime_secs),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(RADIUS),
            Sensor,
            layers,
            LinearVelocity(req.vel),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    registry.insert(Collection::for_projectile(req.faction), e);
    e
}

pub fn spawn_requested_projectiles(
    mut commands: Commands,
    mut registry: ResMut<EntityRegistry>,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnProjectile>,
) {
    for req in reader.read() {
        spawn_projectile(&mut commands, &mut registry, &tunables, req);
    }
}

/// Advance both projectile collections one step.
pub fn advance_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    registry: Res<EntityRegistry>,
    mut q: Query<(&Transform, &mut Lifetime, &mut LifeState), With<Projectile>>,
) {
    let field = tunables.field();

    for collection in [Collection::PlayerProjectiles, Collection::EnemyProjectiles] {
        for e in registry.snapshot(collection) {
            let Ok((tf, mut lifetime, mut life)) = q.get_mut(e) else {
                continue;
            };
            if !life.is_alive() {
                continue;
            }

            let step = ensure_finite(e, tf.translation).map(|()| {
                lifetime.tick(time.delta());
                let inside = field.contains(field.to_field(tf.translation.truncate()), BOUNDS_MARGIN);
                if lifetime.is_finished() || !inside {
                    life.destroy();
                }
            });
            guard_step(e, &mut life, step);
        }
    }
}
