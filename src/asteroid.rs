//! Drifting asteroids.
//!
//! Asteroids move in straight lines and bounce off the field edges.  They never
//! interact with each other and are never removed individually; the whole set
//! is replaced when a new level starts.

use crate::body::{spawn_clear_of, Body, Field};
use crate::config::GameConfig;
use crate::frame::TextureId;
use crate::ship::Ship;
use bevy::math::Vec2;
use rand::Rng;

/// A moving hazard.  Touching one ends the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub position: Vec2,
    pub visual_size: f32,
    pub hitbox_radius: f32,
    /// Displacement per frame.
    pub velocity: Vec2,
}

impl Asteroid {
    /// Spawn an asteroid clear of `ship` with a random velocity.
    ///
    /// Each velocity component is drawn independently from
    /// `[-asteroid_max_speed, asteroid_max_speed]`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, ship: &Ship, config: &GameConfig) -> Self {
        let radius = config.asteroid_hitbox_radius;
        let position = spawn_clear_of(
            rng,
            config.field(),
            radius,
            ship.position,
            ship.hitbox_radius + radius,
            config.spawn_max_attempts,
        );
        let max = config.asteroid_max_speed;
        let velocity = Vec2::new(rng.gen_range(-max..=max), rng.gen_range(-max..=max));
        Self {
            position,
            visual_size: config.asteroid_visual_size,
            hitbox_radius: radius,
            velocity,
        }
    }

    /// Asteroid with a fixed position and velocity.
    pub fn at(position: Vec2, velocity: Vec2, config: &GameConfig) -> Self {
        Self {
            position,
            visual_size: config.asteroid_visual_size,
            hitbox_radius: config.asteroid_hitbox_radius,
            velocity,
        }
    }

    /// Advance one frame, reflecting off the field edges.
    ///
    /// The edge test uses the position *before* moving: an axis whose hitbox
    /// edge is already past the boundary has its velocity component negated,
    /// then the (possibly flipped) velocity is applied.  An asteroid can
    /// therefore overshoot the wall by at most one frame of travel.
    pub fn move_within(&mut self, field: Field) {
        let r = self.hitbox_radius;
        if self.position.x + r > field.width || self.position.x - r < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y + r > field.height || self.position.y - r < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
        self.position += self.velocity;
    }
}

impl Body for Asteroid {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn visual_size(&self) -> f32 {
        self.visual_size
    }

    fn hitbox_radius(&self) -> f32 {
        self.hitbox_radius
    }

    fn texture(&self) -> TextureId {
        TextureId::Asteroid
    }
}
