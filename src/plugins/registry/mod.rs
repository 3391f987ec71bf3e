//! Entity registry: the three gameplay collections.
//!
//! ```text
//! enemies            <- spawner
//! player_projectiles <- player controller (via SpawnProjectile)
//! enemy_projectiles  <- enemy fire        (via SpawnProjectile)
//! ```
//!
//! Collections are append-only during a frame. Per-kind advance passes walk a
//! snapshot, so an entity destroyed mid-pass never shifts the ones after it.
//! `purge_destroyed` (PostUpdate) is the single place that despawns and removes.

use bevy::prelude::*;

use crate::common::error::GameError;
use crate::common::state::GameState;
use crate::plugins::combat::components::{Faction, LifeState};
use crate::plugins::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Enemies,
    PlayerProjectiles,
    EnemyProjectiles,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Enemies,
        Collection::PlayerProjectiles,
        Collection::EnemyProjectiles,
    ];

    #[inline]
    pub fn for_projectile(faction: Faction) -> Self {
        match faction {
            Faction::Player => Collection::PlayerProjectiles,
            Faction::Enemy => Collection::EnemyProjectiles,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct EntityRegistry {
    enemies: Vec<Entity>,
    player_projectiles: Vec<Entity>,
    enemy_projectiles: Vec<Entity>,
}

impl EntityRegistry {
    #[inline]
    fn slot(&self, c: Collection) -> &Vec<Entity> {
        match c {
            Collection::Enemies => &self.enemies,
            Collection::PlayerProjectiles => &self.player_projectiles,
            Collection::EnemyProjectiles => &self.enemy_projectiles,
        }
    }

    #[inline]
    fn slot_mut(&mut self, c: Collection) -> &mut Vec<Entity> {
        match c {
            Collection::Enemies => &mut self.enemies,
            Collection::PlayerProjectiles => &mut self.player_projectiles,
            Collection::EnemyProjectiles => &mut self.enemy_projectiles,
        }
    }

    pub fn insert(&mut self, c: Collection, e: Entity) {
        self.slot_mut(c).push(e);
    }

    pub fn members(&self, c: Collection) -> &[Entity] {
        self.slot(c)
    }

    /// Copy of the collection taken at the start of a pass.
    pub fn snapshot(&self, c: Collection) -> Vec<Entity> {
        self.slot(c).clone()
    }

    pub fn len(&self, c: Collection) -> usize {
        self.slot(c).len()
    }

    pub fn is_empty(&self) -> bool {
        Collection::ALL.iter().all(|&c| self.slot(c).is_empty())
    }

    pub fn contains(&self, c: Collection, e: Entity) -> bool {
        self.slot(c).contains(&e)
    }

    /// Remove `e` from whichever collection owns it. Order of the rest is kept.
    pub fn remove(&mut self, e: Entity) -> Option<Collection> {
        for c in Collection::ALL {
            let slot = self.slot_mut(c);
            if let Some(i) = slot.iter().position(|&x| x == e) {
                slot.remove(i);
                return Some(c);
            }
        }
        None
    }

    pub fn clear(&mut self) {
        for c in Collection::ALL {
            self.slot_mut(c).clear();
        }
    }
}

/// Per-entity error boundary for advance passes.
///
/// A failed step is logged and the entity is marked destroyed; the rest of the
/// pass carries on.
pub fn guard_step(entity: Entity, life: &mut LifeState, step: Result<(), GameError>) {
    if let Err(err) = step {
        warn!("entity {entity} failed to advance: {err}");
        life.destroy();
    }
}

/// Finite-position check shared by the advance passes.
#[inline]
pub fn ensure_finite(entity: Entity, translation: Vec3) -> Result<(), GameError> {
    if translation.is_finite() {
        Ok(())
    } else {
        Err(GameError::NonFinitePosition { entity })
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<EntityRegistry>()
        .add_systems(OnExit(GameState::InGame), clear_registry)
        .add_systems(
            PostUpdate,
            purge_destroyed.run_if(in_state(GameState::InGame)),
        );
}

/// Despawn every destroyed entity and drop it from its collection.
pub fn purge_destroyed(
    mut commands: Commands,
    mut registry: ResMut<EntityRegistry>,
    q: Query<(Entity, &LifeState, Has<Player>)>,
) {
    let mut purged = 0usize;
    for (e, life, is_player) in &q {
        if !life.is_destroyed() {
            continue;
        }

        registry.remove(e);
        commands.entity(e).despawn();
        purged += 1;

        if is_player {
            info!("player removed from play");
        }
    }

    if purged > 0 {
        debug!("purged {purged} destroyed entities");
    }
}

fn clear_registry(mut registry: ResMut<EntityRegistry>) {
    registry.clear();
}
