//! Crate error type.

use std::path::PathBuf;

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load {}: {source}", path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("spawn position ({x}, {y}) is outside the top edge [0, {width})")]
    InvalidSpawnPosition { x: f32, y: f32, width: f32 },

    #[error("entity {entity} has a non-finite position")]
    NonFinitePosition { entity: Entity },
}
