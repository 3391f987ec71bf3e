//! Tunable gameplay constants.
//!
//! Defaults are the stock game balance. A TOML file named by
//! `LEPERRANGER_CONFIG` may override any subset of the fields.

use std::ops::RangeInclusive;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::common::error::GameError;
use crate::common::field::Field;

pub const CONFIG_ENV: &str = "LEPERRANGER_CONFIG";

/// Firing-rate policy for the player's gun.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FireRate {
    /// One shot per tick while the shoot key is held.
    #[default]
    Unthrottled,
    /// At most one shot per `secs` seconds.
    Cooldown { secs: f32 },
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub field_width: f32,
    pub field_height: f32,

    pub player_speed: f32,
    pub player_health: i32,
    pub fire_rate: FireRate,

    pub enemy_speed: f32,
    pub enemy_health: i32,
    /// Seconds between enemy shots; `<= 0` disables enemy fire.
    pub enemy_fire_secs: f32,
    pub spawn_period_ms: u64,

    pub player_bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub player_bullet_damage: i32,
    pub enemy_bullet_damage: i32,
    pub bullet_lifetime_secs: f32,

    /// Background scroll, in pixels per tick.
    pub backdrop_scroll: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            field_width: 800.0,
            field_height: 600.0,

            player_speed: 200.0,
            player_health: 30,
            fire_rate: FireRate::Unthrottled,

            enemy_speed: 60.0,
            enemy_health: 10,
            enemy_fire_secs: 2.0,
            spawn_period_ms: 5000,

            player_bullet_speed: 500.0,
            enemy_bullet_speed: 250.0,
            player_bullet_damage: 10,
            enemy_bullet_damage: 10,
            bullet_lifetime_secs: 3.0,

            backdrop_scroll: 2.0,
        }
    }
}

impl Tunables {
    #[inline]
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, GameError> {
        let tunables: Self = toml::from_str(text).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(path, &text)
    }

    /// Load from `LEPERRANGER_CONFIG` if set, defaults otherwise.
    pub fn from_env() -> Result<Self, GameError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Reject values that would misbehave or panic once play starts.
    pub fn validate(&self) -> Result<(), GameError> {
        in_range("field_width", self.field_width, 1.0..=MAX_FIELD_PX)?;
        in_range("field_height", self.field_height, 1.0..=MAX_FIELD_PX)?;
        positive("pixels_per_meter", self.pixels_per_meter)?;
        if self.spawn_period_ms == 0 {
            return Err(GameError::InvalidConfig("spawn_period_ms must be positive".into()));
        }

        for (name, v) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("player_bullet_speed", self.player_bullet_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
        ] {
            in_range(name, v, 0.0..=f32::MAX)?;
        }
        finite("backdrop_scroll", self.backdrop_scroll)?;

        for (name, hp) in [
            ("player_health", self.player_health),
            ("enemy_health", self.enemy_health),
        ] {
            if hp <= 0 {
                return Err(GameError::InvalidConfig(format!("{name} must be positive, got {hp}")));
            }
        }
        for (name, dmg) in [
            ("player_bullet_damage", self.player_bullet_damage),
            ("enemy_bullet_damage", self.enemy_bullet_damage),
        ] {
            if dmg < 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must not be negative, got {dmg}"
                )));
            }
        }

        // Values below feed `Timer::from_seconds`.
        in_range(
            "bullet_lifetime_secs",
            self.bullet_lifetime_secs,
            f32::MIN_POSITIVE..=MAX_TIMER_SECS,
        )?;
        // `<= 0` disables enemy fire.
        in_range("enemy_fire_secs", self.enemy_fire_secs, f32::MIN..=MAX_TIMER_SECS)?;
        if let FireRate::Cooldown { secs } = self.fire_rate {
            in_range("fire_rate cooldown secs", secs, 0.0..=MAX_TIMER_SECS)?;
        }
        Ok(())
    }
}

/// Largest accepted field side, in pixels.
const MAX_FIELD_PX: f32 = 16_384.0;
/// Longest accepted timer period: one day.
const MAX_TIMER_SECS: f32 = 86_400.0;

fn in_range(name: &str, v: f32, range: RangeInclusive<f32>) -> Result<(), GameError> {
    if range.contains(&v) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!(
            "{name} must be in [{}, {}], got {v}",
            range.start(),
            range.end()
        )))
    }
}

fn positive(name: &str, v: f32) -> Result<(), GameError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!("{name} must be positive, got {v}")))
    }
}

fn finite(name: &str, v: f32) -> Result<(), GameError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!("{name} must be finite, got {v}")))
    }
}
