use bevy::prelude::*;

/// Which side fired a projectile. Decides its registry and collision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

/// Lifecycle of every gameplay entity.
///
/// `Destroyed` is a terminal mark; the entity stays in the world until the purge
/// in `PostUpdate` so the collections are never mutated mid-pass.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Destroyed,
}

impl LifeState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    #[inline]
    pub fn is_destroyed(self) -> bool {
        self == Self::Destroyed
    }

    /// Mark destroyed. Returns `true` only on the transition.
    #[inline]
    pub fn destroy(&mut self) -> bool {
        let was_alive = self.is_alive();
        *self = Self::Destroyed;
        was_alive
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
}

/// What a single damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health went down, entity still alive.
    Absorbed,
    /// This hit took the entity to zero or below.
    Destroyed,
    /// The entity was already destroyed; nothing changed.
    Ignored,
}

/// Apply `amount` damage. Destroyed entities take no further damage.
pub fn damage_entity(health: &mut Health, life: &mut LifeState, amount: i32) -> DamageOutcome {
    if life.is_destroyed() {
        return DamageOutcome::Ignored;
    }

    health.hp = health.hp.saturating_sub(amount);
    if health.hp <= 0 {
        life.destroy();
        DamageOutcome::Destroyed
    } else {
        DamageOutcome::Absorbed
    }
}

/// Certain death regardless of remaining health.
pub fn kill_entity(health: &mut Health, life: &mut LifeState) -> DamageOutcome {
    if life.is_destroyed() {
        return DamageOutcome::Ignored;
    }
    health.hp = health.hp.min(0);
    life.destroy();
    DamageOutcome::Destroyed
}

/// Single-hit projectile.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub damage: i32,
    pub faction: Faction,
}

#[derive(Component, Deref, DerefMut, Debug)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Tagged view over the three entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile(Faction),
}
