//! The player's ship.

use crate::body::{Body, Field};
use crate::config::GameConfig;
use crate::frame::TextureId;
use bevy::math::Vec2;

/// Player-controlled ship.
///
/// Position only changes through [`Ship::move_by`] followed by
/// [`Ship::constrain_to_field`]; `GameState` calls both every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub position: Vec2,
    pub visual_size: f32,
    pub hitbox_radius: f32,
    /// Pixels per frame along each held direction.
    pub speed: f32,
}

impl Ship {
    /// New ship at the centre of the configured field.
    pub fn new(config: &GameConfig) -> Self {
        Self::at(config.field().center(), config)
    }

    /// New ship at an explicit position.
    pub fn at(position: Vec2, config: &GameConfig) -> Self {
        Self {
            position,
            visual_size: config.ship_visual_size,
            hitbox_radius: config.ship_hitbox_radius,
            speed: config.ship_speed,
        }
    }

    /// Translate by `delta`.  No bounds check.
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Clamp the centre to `[r, w - r] × [r, h - r]` where `r` is the hitbox radius.
    #[inline]
    pub fn constrain_to_field(&mut self, field: Field) {
        self.position = field.clamp_inset(self.position, self.hitbox_radius);
    }
}

impl Body for Ship {
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
        TextureId::Ship
    }
}
