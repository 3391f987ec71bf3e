//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render/input/log) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::error::GameError;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins;

/// Load configuration, then run the windowed game.
///
/// Configuration errors are fatal and returned before any window opens.
pub fn run() -> Result<(), GameError> {
    let tunables = Tunables::from_env()?;

    let mut app = App::new();
    app.insert_resource(tunables);
    configure_full(&mut app);
    app.run();
    Ok(())
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    // Field size is validated to [1, 16384] px at load.
    let (width, height) = {
        let t = app.world().get_resource::<Tunables>().cloned().unwrap_or_default();
        (t.field_width.round() as u32, t.field_height.round() as u32)
    };

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Leperranger".into(),
                    resolution: WindowResolution::new(width, height),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: Level::INFO,
                filter: "wgpu=error,naga=warn,leperranger=debug".into(),
                ..default()
            }),
    );

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (Firefly/camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
