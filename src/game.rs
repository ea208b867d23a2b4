//! Core game state and the per-frame update.
//!
//! [`GameState`] owns the ship, the gems, and the asteroids together with the
//! score, level, and high score.  It knows nothing about Bevy's ECS: the host
//! feeds it one [`DirectionSet`] per frame through [`GameState::tick`], draws
//! the returned [`Frame`], and reacts to the [`GameEvent`]s it drains.
//!
//! ## Per-tick pipeline
//!
//! | Step | Action |
//! |------|--------|
//! | 1 | Move the ship by the held directions and clamp it to the field |
//! | 2 | Collect every gem the ship overlaps (+1 score each) |
//! | 3 | Move every asteroid; any overlap with the ship ends the game |
//! | 4 | If no gems remain, start the next level |
//! | 5 | Build the [`Frame`] |
//!
//! Steps 1–4 are skipped entirely once the game is over; the frozen frame is
//! returned until [`GameState::restart`] is called.

use crate::asteroid::Asteroid;
use crate::body::{Body, Field};
use crate::config::GameConfig;
use crate::constants::{
    BANNER_OFFSET_Y, EVENT_QUEUE_CAP, HIGH_SCORE_OFFSET_Y, HUD_LINE_SPACING, HUD_MARGIN_X,
    HUD_SCORE_Y,
};
use crate::frame::{Frame, HudText, TextAnchor, TextureId};
use crate::gem::Gem;
use crate::input::DirectionSet;
use crate::ship::Ship;
use bevy::log::{debug, info, warn};
use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Notifications for the host UI, drained once per tick.
///
/// Only the latest [`EVENT_QUEUE_CAP`] undrained events are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `true` when the ship was destroyed, `false` after a restart.
    GameOverChanged(bool),
    /// A new level began (also emitted for level 1 on restart).
    LevelStarted(u32),
    /// A gem was picked up; carries the new score.
    GemCollected { score: u32 },
}

/// The whole game session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: StdRng,
    level: u32,
    score: u32,
    high_score: u32,
    ship: Ship,
    gems: Vec<Gem>,
    asteroids: Vec<Asteroid>,
    game_over: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new session at level 1.
    ///
    /// Uses `config.rng_seed` when set, OS entropy otherwise.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Start a new session with an explicit generator.
    ///
    /// A config that fails [`GameConfig::validate`] is replaced by the
    /// defaults (keeping its seed).
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("[game] {e}; using default config");
                GameConfig {
                    rng_seed: config.rng_seed,
                    ..GameConfig::default()
                }
            }
        };
        let ship = Ship::new(&config);
        let mut state = Self {
            config,
            rng,
            level: 1,
            score: 0,
            high_score: 0,
            ship,
            gems: Vec::new(),
            asteroids: Vec::new(),
            game_over: false,
            events: Vec::new(),
        };
        state.populate_level();
        state
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> Field {
        self.config.field()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= EVENT_QUEUE_CAP {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Run one frame and describe what to draw.
    pub fn tick(&mut self, directions: DirectionSet) -> Frame {
        if !self.game_over {
            self.apply_input(directions);
            self.collect_gems();
            self.advance_asteroids();
            if self.gems.is_empty() {
                self.advance_level();
            }
        }
        self.frame()
    }

    /// Move the ship by the held directions and clamp it to the field.
    ///
    /// Ignored after game over.
    pub fn apply_input(&mut self, directions: DirectionSet) {
        if self.game_over {
            return;
        }
        let delta = directions.displacement(self.ship.speed);
        self.ship.move_by(delta);
        self.ship.constrain_to_field(self.config.field());
    }

    /// Remove every gem the ship overlaps, scoring one point each.
    fn collect_gems(&mut self) {
        let ship = &self.ship;
        let before = self.gems.len();
        self.gems.retain(|gem| !gem.overlaps(ship));
        let collected = (before - self.gems.len()) as u32;
        for _ in 0..collected {
            self.score += 1;
            let score = self.score;
            self.push_event(GameEvent::GemCollected { score });
        }
    }

    /// Move every asteroid once; the first overlap with the ship ends the game.
    ///
    /// Asteroids after the colliding one still move this frame.
    fn advance_asteroids(&mut self) {
        let field = self.config.field();
        let mut hit = false;
        for asteroid in &mut self.asteroids {
            asteroid.move_within(field);
            if asteroid.overlaps(&self.ship) {
                hit = true;
            }
        }
        if hit {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
        self.push_event(GameEvent::GameOverChanged(true));
        info!(
            "[game] Game over at level {}: score {}, high score {}",
            self.level, self.score, self.high_score
        );
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.populate_level();
        info!("[game] Level {} started (score {})", self.level, self.score);
    }

    /// Replace gems and asteroids with a fresh set for the current level.
    fn populate_level(&mut self) {
        let gem_count = self.config.gems_for_level(self.level);
        let asteroid_count = self.config.asteroids_for_level(self.level);

        self.gems = (0..gem_count)
            .map(|_| Gem::spawn(&mut self.rng, &self.ship, &self.config))
            .collect();
        self.asteroids = (0..asteroid_count)
            .map(|_| Asteroid::spawn(&mut self.rng, &self.ship, &self.config))
            .collect();

        self.push_event(GameEvent::LevelStarted(self.level));
        debug!(
            "[game] Level {} populated: {} gems, {} asteroids",
            self.level, gem_count, asteroid_count
        );
    }

    /// Start over at level 1 with a fresh ship.  The high score is kept.
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.ship = Ship::new(&self.config);
        self.game_over = false;
        self.push_event(GameEvent::GameOverChanged(false));
        self.populate_level();
        info!("[game] Restarted (high score {})", self.high_score);
    }

    // ── Rendering description ────────────────────────────────────────────────

    /// Describe the current state without advancing it.
    pub fn frame(&self) -> Frame {
        let mut sprites = Vec::with_capacity(self.gems.len() + self.asteroids.len() + 1);
        sprites.extend(self.gems.iter().map(|gem| gem.sprite()));
        sprites.extend(self.asteroids.iter().map(|asteroid| asteroid.sprite()));
        sprites.push(self.ship.sprite());

        let hud = self.config.hud_font_size;
        let mut texts = vec![
            HudText {
                text: format!("Score: {}", self.score),
                position: Vec2::new(HUD_MARGIN_X, HUD_SCORE_Y),
                font_size: hud,
                anchor: TextAnchor::TopLeft,
                shade: 1.0,
            },
            HudText {
                text: format!("Level: {}", self.level),
                position: Vec2::new(HUD_MARGIN_X, HUD_SCORE_Y + HUD_LINE_SPACING),
                font_size: hud,
                anchor: TextAnchor::TopLeft,
                shade: 1.0,
            },
        ];

        if self.game_over {
            let center = self.field().center();
            texts.push(HudText {
                text: "GAME OVER".to_string(),
                position: center + Vec2::new(0.0, BANNER_OFFSET_Y),
                font_size: self.config.banner_font_size,
                anchor: TextAnchor::Center,
                shade: 200.0 / 255.0,
            });
            texts.push(HudText {
                text: format!("High Score: {}", self.high_score),
                position: center + Vec2::new(0.0, HIGH_SCORE_OFFSET_Y),
                font_size: hud,
                anchor: TextAnchor::Center,
                shade: 200.0 / 255.0,
            });
        }

        Frame {
            background: TextureId::Background,
            sprites,
            texts,
            show_restart: self.game_over,
        }
    }

    // ── Scripted setup ───────────────────────────────────────────────────────

    /// Replace the current bodies, e.g. to stage a specific collision.
    ///
    /// Score, level, and game-over state are left alone.
    pub fn set_bodies(&mut self, ship: Ship, gems: Vec<Gem>, asteroids: Vec<Asteroid>) {
        self.ship = ship;
        self.gems = gems;
        self.asteroids = asteroids;
    }
}
