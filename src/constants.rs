//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig::default`] reads every value from this file, so
//! `assets/game.toml` only needs to list the values it overrides.

// ── Field ─────────────────────────────────────────────────────────────────────

/// Width of the play field in pixels.  The window is created at this size.
pub const FIELD_WIDTH: f32 = 800.0;

/// Height of the play field in pixels.
pub const FIELD_HEIGHT: f32 = 600.0;

/// Title shown in the window decoration.
pub const WINDOW_TITLE: &str = "Gem Rush";

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Drawn size of the ship sprite (square, pixels).
pub const SHIP_VISUAL_SIZE: f32 = 60.0;

/// Collision radius of the ship.
///
/// Deliberately much smaller than the sprite so grazing an asteroid's outline
/// does not end the run.
pub const SHIP_HITBOX_RADIUS: f32 = 15.0;

/// Pixels the ship travels per frame along each held direction.
pub const SHIP_SPEED: f32 = 5.0;

// ── Gems ──────────────────────────────────────────────────────────────────────

/// Drawn size of a gem sprite.
pub const GEM_VISUAL_SIZE: f32 = 30.0;

/// Collision radius of a gem.
pub const GEM_HITBOX_RADIUS: f32 = 7.5;

/// Gems spawned per level on top of the level number (`level + BASE_GEM_COUNT`).
pub const BASE_GEM_COUNT: u32 = 3;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Drawn size of an asteroid sprite.
pub const ASTEROID_VISUAL_SIZE: f32 = 100.0;

/// Collision radius of an asteroid.  Also the inset used for wall bounces.
pub const ASTEROID_HITBOX_RADIUS: f32 = 25.0;

/// Upper bound of each asteroid velocity component, in pixels per frame.
///
/// Components are drawn independently from `[-ASTEROID_MAX_SPEED, ASTEROID_MAX_SPEED]`.
pub const ASTEROID_MAX_SPEED: f32 = 2.0;

/// Asteroids spawned per level (`level * ASTEROIDS_PER_LEVEL`).
pub const ASTEROIDS_PER_LEVEL: u32 = 2;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Simulation rate.  Speeds are in pixels per tick, so the game runs at the
/// same pace whatever the display refresh rate.
pub const TICK_RATE_HZ: f64 = 60.0;

/// Undrained [`crate::game::GameEvent`]s kept before the oldest are dropped.
pub const EVENT_QUEUE_CAP: usize = 64;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Rejection-sampling attempts before a spawn falls back to the farthest
/// candidate seen.
///
/// On the default 800×600 field a valid position is found on the first or
/// second try; the cap only matters on tiny fields where the keep-out circle
/// around the ship covers most of the spawn area.
pub const SPAWN_MAX_ATTEMPTS: u32 = 1000;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size of the score / level / high-score lines.
pub const HUD_FONT_SIZE: f32 = 20.0;

/// Font size of the "GAME OVER" banner.
pub const BANNER_FONT_SIZE: f32 = 80.0;

/// Left margin of the score / level lines.
pub const HUD_MARGIN_X: f32 = 10.0;

/// Baseline of the score line; the level line sits one `HUD_LINE_SPACING` below.
pub const HUD_SCORE_Y: f32 = 30.0;

/// Vertical spacing between HUD lines.
pub const HUD_LINE_SPACING: f32 = 30.0;

/// Offset of the banner above the field centre.
pub const BANNER_OFFSET_Y: f32 = -40.0;

/// Offset of the high-score line below the field centre.
pub const HIGH_SCORE_OFFSET_Y: f32 = 20.0;

/// Offset of the restart button's top edge below the field centre.
pub const RESTART_BUTTON_OFFSET_Y: f32 = 80.0;
