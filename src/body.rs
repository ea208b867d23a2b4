//! Shared shape of everything drawn on the play field.
//!
//! Ships, gems, and asteroids are all circles for collision purposes: a
//! centre position plus a hitbox radius that is usually smaller than the drawn
//! sprite.  The [`Body`] trait captures that shape, and [`spawn_clear_of`] is the
//! rejection sampler used by gems and asteroids to avoid appearing on top of
//! the ship.
//!
//! All coordinates are screen space: origin top-left, `y` grows downward.

use crate::frame::{SpriteDraw, TextureId};
use bevy::log::warn;
use bevy::math::Vec2;
use rand::Rng;

/// Rectangular play-area bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Centre point of the field.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp `position` so a circle of `radius` stays inside the field.
    ///
    /// When the field is narrower than the circle on an axis the coordinate is
    /// pinned to the centre of that axis.
    pub fn clamp_inset(&self, position: Vec2, radius: f32) -> Vec2 {
        let (min_x, max_x) = inset_range(self.width, radius);
        let (min_y, max_y) = inset_range(self.height, radius);
        Vec2::new(position.x.clamp(min_x, max_x), position.y.clamp(min_y, max_y))
    }
}

/// `[radius, extent - radius]`, collapsed to the midpoint when it would be empty.
fn inset_range(extent: f32, radius: f32) -> (f32, f32) {
    if extent - radius >= radius {
        (radius, extent - radius)
    } else {
        (extent / 2.0, extent / 2.0)
    }
}

/// A circular thing on the field that the renderer can draw.
pub trait Body {
    /// Centre of the body.
    fn position(&self) -> Vec2;

    /// Side length of the square sprite.
    fn visual_size(&self) -> f32;

    /// Collision radius.
    fn hitbox_radius(&self) -> f32;

    /// Texture the renderer should draw this body with.
    fn texture(&self) -> TextureId;

    /// Euclidean centre-to-centre distance.
    fn distance_to(&self, other: &dyn Body) -> f32 {
        self.position().distance(other.position())
    }

    /// `true` when the two hitboxes strictly overlap.
    ///
    /// Touching circles (distance exactly equal to the radius sum) do not count.
    fn overlaps(&self, other: &dyn Body) -> bool {
        self.distance_to(other) < self.hitbox_radius() + other.hitbox_radius()
    }

    /// Draw description for this body.
    fn sprite(&self) -> SpriteDraw {
        SpriteDraw {
            texture: self.texture(),
            center: self.position(),
            size: self.visual_size(),
        }
    }
}

/// Pick a uniformly random position for a circle of `radius` that lies inside
/// `field` and at least `min_distance` away from `avoid`.
///
/// Sampling stops after `max_attempts` tries.  If none of them satisfied the
/// distance rule (only possible on fields barely larger than the keep-out
/// circle) the candidate farthest from `avoid` is returned instead.
pub fn spawn_clear_of<R: Rng + ?Sized>(
    rng: &mut R,
    field: Field,
    radius: f32,
    avoid: Vec2,
    min_distance: f32,
    max_attempts: u32,
) -> Vec2 {
    let (min_x, max_x) = inset_range(field.width, radius);
    let (min_y, max_y) = inset_range(field.height, radius);

    let mut best = field.center();
    let mut best_distance = f32::NEG_INFINITY;

    for _ in 0..max_attempts.max(1) {
        let candidate = Vec2::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y));
        let distance = candidate.distance(avoid);
        if distance >= min_distance {
            return candidate;
        }
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    warn!(
        "[spawn] no position {min_distance:.1}px clear of {avoid} after {max_attempts} attempts; \
         using best candidate {best} ({best_distance:.1}px away)"
    );
    best
}
