//! Lighting plugin (Firefly) (render-only): engine glow following the ship.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct ShipLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), spawn_ship_light)
        .add_systems(Update, follow_ship.run_if(in_state(GameState::InGame)));
}

fn spawn_ship_light(mut commands: Commands) {
    commands.spawn((
        Name::new("ShipLight"),
        ShipLight,
        PointLight2d {
            color: Color::srgb(0.55, 0.85, 1.0),
            radius: 260.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_ship(
    mut commands: Commands,
    q_player: Query<&Transform, (With<Player>, Without<ShipLight>)>,
    mut q_light: Query<(Entity, &mut Transform), (With<ShipLight>, Without<Player>)>,
) {
    let Ok((light, mut tf_light)) = q_light.single_mut() else {
        return;
    };
    // The ship is gone once purged; the light goes with it.
    let Ok(tf_player) = q_player.single() else {
        commands.entity(light).despawn();
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}
