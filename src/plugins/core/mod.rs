//! Core plugin: shared resources and global settings.
//!
//! Resources already present (e.g. `Tunables` loaded from a config file) are kept.

use bevy::prelude::*;

use crate::common::bindings::KeyBindings;
use crate::common::state::configure_tick_sets;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.init_resource::<KeyBindings>();
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.06)));
    configure_tick_sets(app);
}
