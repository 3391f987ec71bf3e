//! Enemies plugin: timed spawner, drift, and enemy fire.
//!
//! The spawner is a scheduled-task record (`EnemySpawner`) that lives only while
//! `InGame` is active and runs on wall-clock time. Leaving the state removes it, which is the cancellation:
//! nothing can fire into a torn-down registry.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::error::GameError;
use crate::common::layers::enemy_layers;
use crate::common::state::{GameState, TickSet};
use crate::common::tunables::Tunables;
use crate::plugins::combat::components::{Faction, Health, LifeState};
use crate::plugins::projectiles::messages::SpawnProjectile;
use crate::plugins::registry::{Collection, EntityRegistry, ensure_finite, guard_step};

const SIZE: f32 = 48.0;

#[derive(Component)]
pub struct Enemy;

/// Per-enemy repeating fire timer. Absent when enemy fire is disabled.
#[derive(Component, Deref, DerefMut, Debug)]
pub struct EnemyGun(pub Timer);

/// Repeating spawn timer plus the RNG used for spawn positions.
#[derive(Resource, Debug)]
pub struct EnemySpawner {
    timer: Timer,
    rng: StdRng,
    fired: u64,
}

impl EnemySpawner {
    pub fn new(period: Duration, rng: StdRng) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
            rng,
            fired: 0,
        }
    }

    pub fn with_seed(period: Duration, seed: u64) -> Self {
        Self::new(period, StdRng::seed_from_u64(seed))
    }

    /// Total number of fires since the spawner was created.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Advance the timer; returns how many periods elapsed during `dt`.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.timer.tick(dt);
        let n = self.timer.times_finished_this_tick();
        self.fired += u64::from(n);
        n
    }

    /// Field-space spawn point on the top edge: x uniform in `[0, width)`, y = 0.
    pub fn sample_position(&mut self, width: f32) -> Result<Vec2, GameError> {
        let x = self.rng.random_range(0.0..width);
        let pos = Vec2::new(x, 0.0);
        validate_spawn_position(pos, width)?;
        Ok(pos)
    }
}

pub fn validate_spawn_position(pos: Vec2, width: f32) -> Result<(), GameError> {
    if (0.0..width).contains(&pos.x) && pos.y == 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSpawnPosition {
            x: pos.x,
            y: pos.y,
            width,
        })
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), start_spawner)
        .add_systems(OnExit(GameState::InGame), cancel_spawner)
        .add_systems(Update, tick_spawner.in_set(TickSet::Spawn))
        .add_systems(Update, advance_enemies.in_set(TickSet::Advance));
}

fn start_spawner(mut commands: Commands, tunables: Res<Tunables>) {
    let period = Duration::from_millis(tunables.spawn_period_ms);
    commands.insert_resource(EnemySpawner::new(period, StdRng::from_os_rng()));
    info!("enemy spawner armed, period {period:?}");
}

fn cancel_spawner(mut commands: Commands) {
    commands.remove_resource::<EnemySpawner>();
}

/// Spawn one enemy at a field-space position and register it.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &mut EntityRegistry,
    tunables: &Tunables,
    field_pos: Vec2,
) -> Entity {
    let world = tunables.field().to_world(field_pos);

    let mut entity = commands.spawn((
        Name::new("Enemy"),
        Enemy,
        Health {
            hp: tunables.enemy_health,
        },
        LifeState::Alive,
        Sprite {
            color: Color::srgb(0.9, 0.25, 0.25),
            custom_size: Some(Vec2::splat(SIZE)),
            ..default()
        },
        Transform::from_translation(world.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(SIZE * 0.5),
        Sensor,
        enemy_layers(),
        LinearVelocity(Vec2::new(0.0, -tunables.enemy_speed)),
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
    if tunables.enemy_fire_secs > 0.0 {
        entity.insert(EnemyGun(Timer::from_seconds(
            tunables.enemy_fire_secs,
            TimerMode::Repeating,
        )));
    }

    let e = entity.id();
    registry.insert(Collection::Enemies, e);
    e
}

/// Fire the spawner for every period elapsed this frame.
///
/// Ticked on `Time<Real>`; the virtual clock clamps long frames.
pub fn tick_spawner(
    mut commands: Commands,
    time: Res<Time<Real>>,
    tunables: Res<Tunables>,
    spawner: Option<ResMut<EnemySpawner>>,
    mut registry: ResMut<EntityRegistry>,
) -> Result {
    let Some(mut spawner) = spawner else {
        return Ok(());
    };

    let fires = spawner.tick(time.delta());
    for _ in 0..fires {
        let pos = spawner.sample_position(tunables.field_width)?;
        let e = spawn_enemy(&mut commands, &mut registry, &tunables, pos);
        debug!("spawned enemy {e} at x = {:.1}", pos.x);
    }
    Ok(())
}

/// Advance every enemy one step: hold the drift velocity and fire when due.
pub fn advance_enemies(
    time: Res<Time>,
    tunables: Res<Tunables>,
    registry: Res<EntityRegistry>,
    mut writer: MessageWriter<SpawnProjectile>,
    mut q: Query<(&Transform, &mut LinearVelocity, &mut LifeState, Option<&mut EnemyGun>), With<Enemy>>,
) {
    for e in registry.snapshot(Collection::Enemies) {
        let Ok((tf, mut vel, mut life, gun)) = q.get_mut(e) else {
            continue;
        };
        if !life.is_alive() {
            continue;
        }

        let step = ensure_finite(e, tf.translation).map(|()| {
            vel.0 = Vec2::new(0.0, -tunables.enemy_speed);

            let Some(mut gun) = gun else {
                return;
            };
            gun.tick(time.delta());
            for _ in 0..gun.times_finished_this_tick() {
                writer.write(SpawnProjectile {
                    faction: Faction::Enemy,
                    pos: tf.translation.truncate() - Vec2::Y * (SIZE * 0.5 + 8.0),
                    vel: Vec2::new(0.0, -tunables.enemy_bullet_speed),
                    damage: tunables.enemy_bullet_damage,
                });
            }
        });
        guard_step(e, &mut life, step);
    }
}
