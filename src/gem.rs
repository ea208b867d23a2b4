//! Collectible gems.

use crate::body::{spawn_clear_of, Body};
use crate::config::GameConfig;
use crate::frame::TextureId;
use crate::ship::Ship;
use bevy::math::Vec2;
use rand::Rng;

/// Colour of a gem.  Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemVariant {
    Red,
    Green,
    Blue,
}

impl GemVariant {
    pub const ALL: [GemVariant; 3] = [GemVariant::Red, GemVariant::Green, GemVariant::Blue];

    /// Uniformly random variant.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A static collectible.  Collected (removed) as soon as the ship overlaps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Gem {
    pub position: Vec2,
    pub visual_size: f32,
    pub hitbox_radius: f32,
    pub variant: GemVariant,
}

impl Gem {
    /// Spawn a gem somewhere on the field that does not overlap `ship`.
    ///
    /// The clearance is only checked here; the ship may later drift onto a gem
    /// spawned next to it, which simply collects it.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, ship: &Ship, config: &GameConfig) -> Self {
        let radius = config.gem_hitbox_radius;
        let position = spawn_clear_of(
            rng,
            config.field(),
            radius,
            ship.position,
            ship.hitbox_radius + radius,
            config.spawn_max_attempts,
        );
        Self {
            position,
            visual_size: config.gem_visual_size,
            hitbox_radius: radius,
            variant: GemVariant::random(rng),
        }
    }

    /// Gem at a fixed position, used by tests and scripted setups.
    pub fn at(position: Vec2, variant: GemVariant, config: &GameConfig) -> Self {
        Self {
            position,
            visual_size: config.gem_visual_size,
            hitbox_radius: config.gem_hitbox_radius,
            variant,
        }
    }
}

impl Body for Gem {
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
        TextureId::Gem(self.variant)
    }
}
