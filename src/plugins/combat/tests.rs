//! Combat tests.
//!
//! These inject `CollisionStart` messages directly and run the resolver once,
//! instead of relying on the physics pipeline to detect overlaps.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::test_utils::{run_system_once, write_collision_start};
use crate::plugins::enemies::Enemy;
use crate::plugins::player::Player;

use super::collision::{HitRule, classify, resolve_collisions};
use super::components::*;

fn spawn_player(world: &mut World, hp: i32) -> Entity {
    world.spawn((Player, Health { hp }, LifeState::Alive)).id()
}

fn spawn_enemy(world: &mut World, hp: i32) -> Entity {
    world.spawn((Enemy, Health { hp }, LifeState::Alive)).id()
}

fn spawn_projectile(world: &mut World, faction: Faction, damage: i32) -> Entity {
    world.spawn((Projectile { damage, faction }, LifeState::Alive)).id()
}

fn life(world: &World, e: Entity) -> LifeState {
    *world.get::<LifeState>(e).unwrap()
}

fn hp(world: &World, e: Entity) -> i32 {
    world.get::<Health>(e).unwrap().hp
}

// --------------------------------------------------------------------------------------
// Damage model
// --------------------------------------------------------------------------------------

#[test]
fn damage_destroys_exactly_when_cumulative_reaches_health() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _case in 0..2000 {
        let initial = rng.random_range(1..200);
        let mut health = Health { hp: initial };
        let mut state = LifeState::Alive;
        let mut total = 0;
        let mut destroyed_events = 0;

        for _ in 0..rng.random_range(1..20) {
            let d = rng.random_range(0..50);
            let outcome = damage_entity(&mut health, &mut state, d);
            if outcome != DamageOutcome::Ignored {
                total += d;
            }
            if outcome == DamageOutcome::Destroyed {
                destroyed_events += 1;
            }
            assert_eq!(state.is_destroyed(), total >= initial);
        }

        assert!(destroyed_events <= 1);
        assert_eq!(destroyed_events == 1, total >= initial);
    }
}

#[test]
fn damage_after_destruction_is_ignored() {
    let mut health = Health { hp: 5 };
    let mut state = LifeState::Alive;

    assert_eq!(damage_entity(&mut health, &mut state, 5), DamageOutcome::Destroyed);
    assert_eq!(damage_entity(&mut health, &mut state, 5), DamageOutcome::Ignored);
    assert_eq!(health.hp, 0);
}

#[test]
fn kill_ignores_remaining_health() {
    let mut health = Health { hp: i32::MAX };
    let mut state = LifeState::Alive;
    assert_eq!(kill_entity(&mut health, &mut state), DamageOutcome::Destroyed);
    assert!(state.is_destroyed());
    assert_eq!(kill_entity(&mut health, &mut state), DamageOutcome::Ignored);
}

#[test]
fn destroy_reports_only_the_transition() {
    let mut state = LifeState::Alive;
    assert!(state.destroy());
    assert!(!state.destroy());
}

// --------------------------------------------------------------------------------------
// Pair classification
// --------------------------------------------------------------------------------------

#[test]
fn classify_is_order_independent_and_rejects_same_faction() {
    let mut world = World::new();
    let p = world.spawn_empty().id();
    let e = world.spawn_empty().id();
    let pb = world.spawn_empty().id();
    let eb = world.spawn_empty().id();

    let player = (p, EntityKind::Player);
    let enemy = (e, EntityKind::Enemy);
    let player_shot = (pb, EntityKind::Projectile(Faction::Player));
    let enemy_shot = (eb, EntityKind::Projectile(Faction::Enemy));

    let rammed = Some(HitRule::PlayerRammed { player: p, enemy: e });
    assert_eq!(classify(player, enemy), rammed);
    assert_eq!(classify(enemy, player), rammed);

    let shot = Some(HitRule::EnemyShot { enemy: e, projectile: pb });
    assert_eq!(classify(enemy, player_shot), shot);
    assert_eq!(classify(player_shot, enemy), shot);

    let hit = Some(HitRule::PlayerShot { player: p, projectile: eb });
    assert_eq!(classify(enemy_shot, player), hit);

    // No friendly fire and no projectile-vs-projectile.
    assert_eq!(classify(player, player_shot), None);
    assert_eq!(classify(enemy, enemy_shot), None);
    assert_eq!(classify(enemy, enemy), None);
    assert_eq!(classify(player_shot, enemy_shot), None);
}

// --------------------------------------------------------------------------------------
// Resolver
// --------------------------------------------------------------------------------------

#[test]
fn enemy_hit_by_lethal_projectile_destroys_both_in_one_step() {
    let mut world = World::new();
    let enemy = spawn_enemy(&mut world, 10);
    let shot = spawn_projectile(&mut world, Faction::Player, 10);

    write_collision_start(&mut world, shot, enemy);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, enemy).is_destroyed());
    assert!(life(&world, shot).is_destroyed());
    assert_eq!(hp(&world, enemy), 0);
}

#[test]
fn non_lethal_hit_still_consumes_projectile() {
    let mut world = World::new();
    let enemy = spawn_enemy(&mut world, 25);
    let shot = spawn_projectile(&mut world, Faction::Player, 10);

    write_collision_start(&mut world, enemy, shot);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, enemy).is_alive());
    assert_eq!(hp(&world, enemy), 15);
    assert!(life(&world, shot).is_destroyed());
}

#[test]
fn projectile_applies_damage_once_across_repeated_reports() {
    let mut world = World::new();
    let a = spawn_enemy(&mut world, 100);
    let b = spawn_enemy(&mut world, 100);
    let shot = spawn_projectile(&mut world, Faction::Player, 10);

    // Same bullet reported twice against one enemy and once against another.
    write_collision_start(&mut world, shot, a);
    write_collision_start(&mut world, a, shot);
    write_collision_start(&mut world, shot, b);
    run_system_once(&mut world, resolve_collisions);

    assert_eq!(hp(&world, a), 90);
    assert_eq!(hp(&world, b), 100);
    assert!(life(&world, shot).is_destroyed());
}

#[test]
fn dead_enemy_is_not_hit_twice_but_still_spends_the_shot() {
    let mut world = World::new();
    let enemy = spawn_enemy(&mut world, 10);
    let first = spawn_projectile(&mut world, Faction::Player, 10);
    let second = spawn_projectile(&mut world, Faction::Player, 10);

    write_collision_start(&mut world, first, enemy);
    write_collision_start(&mut world, second, enemy);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, enemy).is_destroyed());
    assert_eq!(hp(&world, enemy), 0);
    assert!(life(&world, first).is_destroyed());
    assert!(life(&world, second).is_destroyed());
}

#[test]
fn enemy_contact_kills_player_regardless_of_health() {
    let mut world = World::new();
    let player = spawn_player(&mut world, 1_000_000);
    let enemy = spawn_enemy(&mut world, 10);

    write_collision_start(&mut world, enemy, player);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, player).is_destroyed());
    // Contact does not hurt the enemy.
    assert!(life(&world, enemy).is_alive());
    assert_eq!(hp(&world, enemy), 10);
}

#[test]
fn enemy_projectile_damages_player() {
    let mut world = World::new();
    let player = spawn_player(&mut world, 30);
    let shot = spawn_projectile(&mut world, Faction::Enemy, 10);

    write_collision_start(&mut world, player, shot);
    run_system_once(&mut world, resolve_collisions);

    assert_eq!(hp(&world, player), 20);
    assert!(life(&world, player).is_alive());
    assert!(life(&world, shot).is_destroyed());
}

#[test]
fn same_faction_pairs_are_ignored() {
    let mut world = World::new();
    let player = spawn_player(&mut world, 30);
    let own_shot = spawn_projectile(&mut world, Faction::Player, 10);
    let enemy = spawn_enemy(&mut world, 10);
    let enemy_shot = spawn_projectile(&mut world, Faction::Enemy, 10);

    write_collision_start(&mut world, player, own_shot);
    write_collision_start(&mut world, enemy, enemy_shot);
    run_system_once(&mut world, resolve_collisions);

    assert_eq!(hp(&world, player), 30);
    assert_eq!(hp(&world, enemy), 10);
    assert!(life(&world, own_shot).is_alive());
    assert!(life(&world, enemy_shot).is_alive());
}

#[test]
fn dead_player_takes_no_further_hits_but_still_spends_the_shot() {
    let mut world = World::new();
    let player = spawn_player(&mut world, 30);
    let enemy = spawn_enemy(&mut world, 10);
    let shot = spawn_projectile(&mut world, Faction::Enemy, 10);

    write_collision_start(&mut world, player, enemy);
    write_collision_start(&mut world, player, shot);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, player).is_destroyed());
    // The shot lands after contact death and adds no damage.
    assert_eq!(hp(&world, player), 0);
    assert!(life(&world, shot).is_destroyed());
}

#[test]
fn shot_resolves_exactly_once_against_dead_and_live_targets() {
    let mut world = World::new();
    let dead = spawn_enemy(&mut world, 10);
    let live = spawn_enemy(&mut world, 30);
    let killer = spawn_projectile(&mut world, Faction::Player, 10);
    let shot = spawn_projectile(&mut world, Faction::Player, 10);

    write_collision_start(&mut world, killer, dead);
    // `shot` overlaps the corpse first, then a live enemy in the same batch.
    write_collision_start(&mut world, shot, dead);
    write_collision_start(&mut world, shot, live);
    run_system_once(&mut world, resolve_collisions);

    assert!(life(&world, shot).is_destroyed());
    assert_eq!(hp(&world, live), 30);
}
