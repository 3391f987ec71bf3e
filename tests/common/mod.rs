//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `leperranger::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed manual step so timers are deterministic.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use leperranger::common::state::GameState;
use leperranger::common::tunables::Tunables;

/// Per-update time step. Stays under `Time<Virtual>`'s max delta so both clocks agree.
pub const STEP: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app with the given tunables installed before the gameplay plugins.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    // No InputPlugin headless; keys are pressed by hand and stay pressed.
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.insert_resource(tunables);

    leperranger::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Skip the menu and run the transition into gameplay.
pub fn enter_game(app: &mut App) {
    // First update only primes the clock.
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Tunables with no spontaneous enemy activity.
pub fn quiet_tunables() -> Tunables {
    Tunables {
        spawn_period_ms: 3_600_000,
        enemy_speed: 0.0,
        enemy_fire_secs: 0.0,
        ..default()
    }
}
