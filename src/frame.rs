//! Render description produced by [`crate::game::GameState::tick`].
//!
//! A [`Frame`] is plain data: which textures to draw where, which HUD lines to
//! print, and whether the restart control should be visible.  The Bevy front
//! end in [`crate::rendering`] turns it into sprites and text; tests inspect it
//! directly.

use crate::gem::GemVariant;
use bevy::math::Vec2;

/// Opaque texture id the host maps to a loaded image handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Background,
    Ship,
    Asteroid,
    Gem(GemVariant),
}

/// One square sprite, centred on `center` (screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureId,
    pub center: Vec2,
    pub size: f32,
}

/// How a [`HudText`] position relates to the rendered text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// `position.x` is the left edge and `position.y` the text baseline.
    TopLeft,
    /// `position` is the centre of the text box.
    Center,
}

/// Greyscale text colour, `0.0` black to `1.0` white.
pub type Shade = f32;

/// One line of HUD text.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
    pub anchor: TextAnchor,
    pub shade: Shade,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Full-field background fill.
    pub background: TextureId,
    /// Gems, then asteroids, then the ship (drawn in order).
    pub sprites: Vec<SpriteDraw>,
    /// Score and level lines, plus banner and high score after game over.
    pub texts: Vec<HudText>,
    /// Whether the restart control should be visible.
    pub show_restart: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            background: TextureId::Background,
            sprites: Vec::new(),
            texts: Vec::new(),
            show_restart: false,
        }
    }
}

impl Frame {
    /// First HUD line whose text starts with `prefix`.
    pub fn text_starting_with(&self, prefix: &str) -> Option<&HudText> {
        self.texts.iter().find(|t| t.text.starts_with(prefix))
    }
}
