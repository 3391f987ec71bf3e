//! Main menu scene: title, prompt, and music credit. Confirm starts the game.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::bindings::KeyBindings;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub const TITLE: &str = "LEPERRANGER";
pub const PROMPT: &str = "Press START to continue...";
pub const MUSIC_CREDIT: &str = "♪ Voidson - Leperranger Main Menu Theme ♪";

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuText {
    Title,
    Prompt,
    Credit,
}

impl MenuText {
    /// Text, font size, and vertical position as a fraction of field height.
    fn layout(self) -> (&'static str, f32, f32) {
        match self {
            MenuText::Title => (TITLE, 72.0, 0.5),
            MenuText::Prompt => (PROMPT, 16.0, 0.6),
            MenuText::Credit => (MUSIC_CREDIT, 12.0, 0.98),
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::MainMenu), spawn_menu)
        .add_systems(Update, start_on_confirm.run_if(in_state(GameState::MainMenu)));
}

fn spawn_menu(mut commands: Commands, tunables: Res<Tunables>) {
    let field = tunables.field();

    for item in [MenuText::Title, MenuText::Prompt, MenuText::Credit] {
        let (text, size, y_frac) = item.layout();
        let pos = field.to_world(Vec2::new(field.width * 0.5, field.height * y_frac));

        commands.spawn((
            Name::new(format!("{item:?}")),
            item,
            Text2d::new(text),
            TextFont {
                font_size: size,
                ..default()
            },
            Transform::from_translation(pos.extend(5.0)),
            DespawnOnExit(GameState::MainMenu),
        ));
    }
}

fn start_on_confirm(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.pressed(bindings.confirm) {
        info!("leaving main menu");
        next.set(GameState::InGame);
    }
}
