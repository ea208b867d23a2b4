//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  `main` calls [`load_game_config`] before the app is
//! built (the window size depends on it), then inserts the result.  Missing keys
//! fall back to the compile-time defaults, so a minimal TOML can override just
//! the values you care about:
//!
//! ```toml
//! field_width = 1024.0
//! field_height = 768.0
//! rng_seed = 42
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::body::Field;
use crate::constants::*;
use crate::error::{validate_non_negative, validate_positive, GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Field ────────────────────────────────────────────────────────────────
    pub field_width: f32,
    pub field_height: f32,
    pub window_title: String,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_visual_size: f32,
    pub ship_hitbox_radius: f32,
    pub ship_speed: f32,

    // ── Gems ─────────────────────────────────────────────────────────────────
    pub gem_visual_size: f32,
    pub gem_hitbox_radius: f32,
    pub base_gem_count: u32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_visual_size: f32,
    pub asteroid_hitbox_radius: f32,
    pub asteroid_max_speed: f32,
    pub asteroids_per_level: u32,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub spawn_max_attempts: u32,
    /// Fixed RNG seed for reproducible runs; `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
    pub banner_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            window_title: WINDOW_TITLE.to_string(),
            ship_visual_size: SHIP_VISUAL_SIZE,
            ship_hitbox_radius: SHIP_HITBOX_RADIUS,
            ship_speed: SHIP_SPEED,
            gem_visual_size: GEM_VISUAL_SIZE,
            gem_hitbox_radius: GEM_HITBOX_RADIUS,
            base_gem_count: BASE_GEM_COUNT,
            asteroid_visual_size: ASTEROID_VISUAL_SIZE,
            asteroid_hitbox_radius: ASTEROID_HITBOX_RADIUS,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroids_per_level: ASTEROIDS_PER_LEVEL,
            spawn_max_attempts: SPAWN_MAX_ATTEMPTS,
            rng_seed: None,
            hud_font_size: HUD_FONT_SIZE,
            banner_font_size: BANNER_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Play-field bounds described by this config.
    #[inline]
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Number of gems spawned when `level` starts.
    #[inline]
    pub fn gems_for_level(&self, level: u32) -> usize {
        (level + self.base_gem_count) as usize
    }

    /// Number of asteroids alive during `level`.
    #[inline]
    pub fn asteroids_for_level(&self, level: u32) -> usize {
        (level * self.asteroids_per_level) as usize
    }

    /// Parse a TOML document, apply defaults for missing keys, and validate.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::ConfigParse {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse the config file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn from_file(path: &str) -> GameResult<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GameError::ConfigIo {
                    path: path.to_string(),
                    message: e.to_string(),
                })
            }
        };
        Self::from_toml_str(&contents)
            .map(Some)
            .map_err(|e| match e {
                GameError::ConfigParse { message, .. } => GameError::ConfigParse {
                    path: path.to_string(),
                    message,
                },
                other => other,
            })
    }

    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("field_width", self.field_width)?;
        validate_positive("field_height", self.field_height)?;
        validate_positive("ship_visual_size", self.ship_visual_size)?;
        validate_positive("ship_hitbox_radius", self.ship_hitbox_radius)?;
        validate_non_negative("ship_speed", self.ship_speed)?;
        validate_positive("gem_visual_size", self.gem_visual_size)?;
        validate_positive("gem_hitbox_radius", self.gem_hitbox_radius)?;
        validate_positive("asteroid_visual_size", self.asteroid_visual_size)?;
        validate_positive("asteroid_hitbox_radius", self.asteroid_hitbox_radius)?;
        validate_non_negative("asteroid_max_speed", self.asteroid_max_speed)?;
        validate_positive("hud_font_size", self.hud_font_size)?;
        validate_positive("banner_font_size", self.banner_font_size)?;
        if self.spawn_max_attempts == 0 {
            return Err(GameError::InvalidConfig {
                name: "spawn_max_attempts",
                value: 0.0,
                expected: "≥ 1",
            });
        }
        Ok(())
    }
}

/// Load `assets/game.toml`, falling back to compiled defaults.
///
/// Runs before the Bevy app exists (the window is sized from the result), so
/// the outcome goes to stdout / stderr rather than through the log plugin.
/// Parse and validation errors are reported but never abort the game.
pub fn load_game_config() -> GameConfig {
    match GameConfig::from_file(CONFIG_PATH) {
        Ok(Some(config)) => {
            println!("✓ Loaded game config from {CONFIG_PATH}");
            config
        }
        Ok(None) => {
            println!("ℹ No {CONFIG_PATH} found; using compiled defaults");
            GameConfig::default()
        }
        Err(e) => {
            eprintln!("⚠ {e}; using defaults");
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("").expect("empty TOML is valid");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_listed_keys() {
        let config = GameConfig::from_toml_str("field_width = 1024.0\nrng_seed = 7\n")
            .expect("valid TOML");
        assert_eq!(config.field_width, 1024.0);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.field_height, FIELD_HEIGHT);
        assert_eq!(config.ship_hitbox_radius, SHIP_HITBOX_RADIUS);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = GameConfig::from_toml_str("field_width = \"wide\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse { .. }), "got {err:?}");
    }

    #[test]
    fn negative_radius_fails_validation() {
        let err = GameConfig::from_toml_str("gem_hitbox_radius = -1.0").unwrap_err();
        assert!(
            matches!(
                err,
                GameError::InvalidConfig {
                    name: "gem_hitbox_radius",
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn zero_retry_cap_fails_validation() {
        let config = GameConfig {
            spawn_max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let loaded = GameConfig::from_file("assets/definitely-not-here.toml")
            .expect("missing file must not error");
        assert!(loaded.is_none());
    }

    #[test]
    fn level_counts_follow_base_and_per_level() {
        let config = GameConfig::default();
        assert_eq!(config.gems_for_level(1), 4);
        assert_eq!(config.asteroids_for_level(1), 2);
        assert_eq!(config.gems_for_level(5), 8);
        assert_eq!(config.asteroids_for_level(5), 10);
    }
}
