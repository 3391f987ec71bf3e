//! World plugin: the scrolling star backdrop shared by both scenes.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::tunables::Tunables;

const STAR_COUNT: usize = 80;
const STAR_SEED: u64 = 0x5EED_57A2;

/// A backdrop element scrolling down the field and wrapping at the bottom.
#[derive(Component, Debug, Clone, Copy)]
pub struct Backdrop;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_backdrop)
        .add_systems(Update, scroll_backdrop);
}

fn spawn_backdrop(mut commands: Commands, tunables: Res<Tunables>) {
    let field = tunables.field();
    let mut rng = StdRng::seed_from_u64(STAR_SEED);

    commands.spawn((
        Name::new("Backdrop"),
        Sprite::from_color(Color::srgb(0.03, 0.03, 0.09), field.size() * 2.0),
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));

    for i in 0..STAR_COUNT {
        let p = Vec2::new(
            rng.random_range(0.0..field.width),
            rng.random_range(0.0..field.height),
        );
        let size = rng.random_range(1.0..3.0);
        let shade = rng.random_range(0.5..1.0);

        commands.spawn((
            Name::new(format!("Star{i}")),
            Backdrop,
            Sprite::from_color(Color::srgb(shade, shade, shade), Vec2::splat(size)),
            Transform::from_translation(field.to_world(p).extend(-9.0)),
        ));
    }
}

/// Scroll by a fixed amount per tick.
fn scroll_backdrop(tunables: Res<Tunables>, mut q: Query<&mut Transform, With<Backdrop>>) {
    let h = tunables.field_height;
    let half_h = h * 0.5;

    // Wrap into [-half_h, half_h) for any scroll speed or direction.
    for mut tf in &mut q {
        let y = tf.translation.y - tunables.backdrop_scroll;
        tf.translation.y = (y + half_h).rem_euclid(h) - half_h;
    }
}
