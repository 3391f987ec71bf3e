//! Player plugin.
//!
//! Pipeline:
//! - Input:   sample keys, write `PlayerIntent` resource
//! - Control: apply intent to velocity, request shots
//! - Advance: keep the ship inside the field
//!
//! Each axis is resolved "first key wins": up beats down, left beats right.
//! Axes are not normalized, so diagonal movement is faster than straight.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::bindings::KeyBindings;
use crate::common::layers::player_layers;
use crate::common::state::{GameState, TickSet};
use crate::common::tunables::{FireRate, Tunables};
use crate::plugins::combat::components::{Faction, Health, LifeState};
use crate::plugins::projectiles::messages::SpawnProjectile;
use crate::plugins::registry::{ensure_finite, guard_step};

const SIZE: f32 = 48.0;

#[derive(Component)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIntent {
    pub vertical: Option<Vertical>,
    pub horizontal: Option<Horizontal>,
    pub shoot: bool,
}

impl PlayerIntent {
    pub fn resolve(up: bool, down: bool, left: bool, right: bool, shoot: bool) -> Self {
        let vertical = if up {
            Some(Vertical::Up)
        } else if down {
            Some(Vertical::Down)
        } else {
            None
        };
        let horizontal = if left {
            Some(Horizontal::Left)
        } else if right {
            Some(Horizontal::Right)
        } else {
            None
        };
        Self { vertical, horizontal, shoot }
    }
}

/// Shot gate for the configurable firing rate.
#[derive(Component, Debug, Default, Clone)]
pub struct Gun {
    cooldown_left: f32,
}

impl Gun {
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.cooldown_left = (self.cooldown_left - dt).max(0.0);
    }

    /// Returns `true` if a shot may be fired now, arming the cooldown if any.
    pub fn try_fire(&mut self, rate: FireRate) -> bool {
        match rate {
            FireRate::Unthrottled => true,
            FireRate::Cooldown { secs } => {
                if self.cooldown_left > 0.0 {
                    return false;
                }
                self.cooldown_left = secs;
                true
            }
        }
    }
}

// Controller operations. World space is y-up, so "up" is +y.

#[inline]
pub fn move_up(vel: &mut LinearVelocity, speed: f32) {
    vel.y = speed;
}

#[inline]
pub fn move_down(vel: &mut LinearVelocity, speed: f32) {
    vel.y = -speed;
}

#[inline]
pub fn move_left(vel: &mut LinearVelocity, speed: f32) {
    vel.x = -speed;
}

#[inline]
pub fn move_right(vel: &mut LinearVelocity, speed: f32) {
    vel.x = speed;
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerIntent>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input.in_set(TickSet::Input))
        .add_systems(Update, apply_controls.in_set(TickSet::Control))
        .add_systems(Update, advance_player.in_set(TickSet::Advance));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let field = tunables.field();
    let pos = field.to_world(field.center());

    commands.spawn((
        Name::new("Player"),
        Player,
        Health {
            hp: tunables.player_health,
        },
        LifeState::Alive,
        Gun::default(),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(SIZE)),
            ..default()
        },
        Transform::from_translation(pos.extend(1.0)),
        RigidBody::Kinematic,
        Collider::circle(SIZE * 0.5),
        player_layers(),
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
    info!("player spawned at {pos}");
}

pub fn gather_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut intent: ResMut<PlayerIntent>,
) {
    *intent = PlayerIntent::resolve(
        keys.pressed(bindings.up),
        keys.pressed(bindings.down),
        keys.pressed(bindings.left),
        keys.pressed(bindings.right),
        keys.pressed(bindings.shoot),
    );
}

pub fn apply_controls(
    time: Res<Time>,
    tunables: Res<Tunables>,
    intent: Res<PlayerIntent>,
    mut writer: MessageWriter<SpawnProjectile>,
    mut q_player: Query<(&Transform, &mut LinearVelocity, &mut Gun, &LifeState), With<Player>>,
) {
    let Ok((tf, mut vel, mut gun, life)) = q_player.single_mut() else {
        return;
    };
    if !life.is_alive() {
        vel.0 = Vec2::ZERO;
        return;
    }

    let speed = tunables.player_speed;
    vel.0 = Vec2::ZERO;
    match intent.vertical {
        Some(Vertical::Up) => move_up(&mut vel, speed),
        Some(Vertical::Down) => move_down(&mut vel, speed),
        None => {}
    }
    match intent.horizontal {
        Some(Horizontal::Left) => move_left(&mut vel, speed),
        Some(Horizontal::Right) => move_right(&mut vel, speed),
        None => {}
    }

    gun.tick(time.delta_secs());
    if intent.shoot && gun.try_fire(tunables.fire_rate) {
        writer.write(SpawnProjectile {
            faction: Faction::Player,
            pos: tf.translation.truncate(),
            vel: Vec2::new(0.0, tunables.player_bullet_speed),
            damage: tunables.player_bullet_damage,
        });
    }
}

/// Keep the ship inside the field.
pub fn advance_player(
    tunables: Res<Tunables>,
    mut q_player: Query<(Entity, &mut Transform, &mut LifeState), With<Player>>,
) {
    let Ok((e, mut tf, mut life)) = q_player.single_mut() else {
        return;
    };
    if !life.is_alive() {
        return;
    }

    let field = tunables.field();
    let step = ensure_finite(e, tf.translation).map(|()| {
        let clamped = field.to_world(field.clamp(field.to_field(tf.translation.truncate())));
        if clamped != tf.translation.truncate() {
            tf.translation.x = clamped.x;
            tf.translation.y = clamped.y;
        }
    });
    guard_step(e, &mut life, step);
}
