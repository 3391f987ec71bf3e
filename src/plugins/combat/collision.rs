//! Collision resolver: the three cross-faction pair rules.
//!
//! ```text
//! (enemy,  player bullet) -> enemy takes bullet damage, bullet destroyed
//! (player, enemy)         -> player dies
//! (player, enemy bullet)  -> player takes bullet damage, bullet destroyed
//! ```
//!
//! Pairs are reported by avian as `CollisionStart` messages. A bullet is spent
//! by the first report that classifies it; later reports for the same bullet
//! are no-ops. Damage to a target that is already `Destroyed` is ignored, so a
//! dead entity is never hit twice.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::plugins::enemies::Enemy;
use crate::plugins::player::Player;

use super::components::{
    DamageOutcome, EntityKind, Faction, Health, LifeState, Projectile, damage_entity, kill_entity,
};

/// A classified overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRule {
    EnemyShot { enemy: Entity, projectile: Entity },
    PlayerRammed { player: Entity, enemy: Entity },
    PlayerShot { player: Entity, projectile: Entity },
}

/// Order-independent pair classification. Same-faction pairs yield `None`.
pub fn classify(a: (Entity, EntityKind), b: (Entity, EntityKind)) -> Option<HitRule> {
    fn ordered(x: (Entity, EntityKind), y: (Entity, EntityKind)) -> Option<HitRule> {
        match (x, y) {
            ((enemy, EntityKind::Enemy), (projectile, EntityKind::Projectile(Faction::Player))) => {
                Some(HitRule::EnemyShot { enemy, projectile })
            }
            ((player, EntityKind::Player), (enemy, EntityKind::Enemy)) => {
                Some(HitRule::PlayerRammed { player, enemy })
            }
            ((player, EntityKind::Player), (projectile, EntityKind::Projectile(Faction::Enemy))) => {
                Some(HitRule::PlayerShot { player, projectile })
            }
            _ => None,
        }
    }

    ordered(a, b).or_else(|| ordered(b, a))
}

#[inline]
fn gameplay_owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

/// Read the variant tag off an entity.
#[inline]
fn kind_of((is_player, is_enemy, projectile): (bool, bool, Option<&Projectile>)) -> Option<EntityKind> {
    match (is_player, is_enemy, projectile) {
        (true, false, None) => Some(EntityKind::Player),
        (false, true, None) => Some(EntityKind::Enemy),
        (false, false, Some(p)) => Some(EntityKind::Projectile(p.faction)),
        _ => None,
    }
}

pub fn resolve_collisions(
    mut started: MessageReader<CollisionStart>,
    q_kind: Query<(Has<Player>, Has<Enemy>, Option<&Projectile>)>,
    mut q_targets: Query<(&mut Health, &mut LifeState), Without<Projectile>>,
    mut q_projectiles: Query<(&Projectile, &mut LifeState)>,
) {
    for ev in started.read() {
        let a = gameplay_owner(ev.collider1, ev.body1);
        let b = gameplay_owner(ev.collider2, ev.body2);

        let (Ok(ka), Ok(kb)) = (q_kind.get(a), q_kind.get(b)) else {
            continue;
        };
        let (Some(ka), Some(kb)) = (kind_of(ka), kind_of(kb)) else {
            continue;
        };
        let Some(rule) = classify((a, ka), (b, kb)) else {
            continue;
        };

        match rule {
            HitRule::EnemyShot { enemy: target, projectile }
            | HitRule::PlayerShot { player: target, projectile } => {
                let Ok((shot, mut shot_life)) = q_projectiles.get_mut(projectile) else {
                    continue;
                };
                if !shot_life.is_alive() {
                    continue;
                }
                // A classified hit always spends the shot, even on a target
                // that died earlier in this batch.
                shot_life.destroy();

                let Ok((mut hp, mut life)) = q_targets.get_mut(target) else {
                    continue;
                };
                let outcome = damage_entity(&mut hp, &mut life, shot.damage);

                if outcome == DamageOutcome::Destroyed {
                    match rule {
                        HitRule::PlayerShot { .. } => info!("player destroyed by {projectile}"),
                        _ => debug!("enemy {target} destroyed by {projectile}"),
                    }
                }
            }
            HitRule::PlayerRammed { player, enemy } => {
                let enemy_alive = q_targets
                    .get(enemy)
                    .map(|(_, life)| life.is_alive())
                    .unwrap_or(false);
                if !enemy_alive {
                    continue;
                }
                let Ok((mut hp, mut life)) = q_targets.get_mut(player) else {
                    continue;
                };
                if kill_entity(&mut hp, &mut life) == DamageOutcome::Destroyed {
                    info!("player destroyed by contact with {enemy}");
                }
            }
        }
    }
}
