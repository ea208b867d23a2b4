//! Presents the current [`Frame`] with Bevy sprites and UI text.
//!
//! ## Layer Model
//!
//! | Layer          | Technology | z / order | Source                       |
//! |----------------|------------|-----------|------------------------------|
//! | Background     | `Sprite`   | -1.0      | `Frame::background`          |
//! | Gems           | `Sprite`   | 0.0–0.1   | `Frame::sprites`             |
//! | Asteroids      | `Sprite`   | 0.0–0.1   | `Frame::sprites`             |
//! | Ship           | `Sprite`   | top       | `Frame::sprites` (last)      |
//! | HUD text       | Bevy UI    | above all | `Frame::texts`               |
//! | Restart button | Bevy UI    | above all | [`crate::menu`] overlay      |
//!
//! ## System Responsibilities
//!
//! | System                 | Schedule          | Purpose                           |
//! |------------------------|-------------------|-----------------------------------|
//! | `setup_camera`         | Startup           | Spawn the 2D camera               |
//! | `load_game_textures`   | Startup           | Queue image loads                 |
//! | `present_frame_system` | Update / Present  | Rebuild changed sprites and text  |
//!
//! The frame is described in screen space (origin top-left, `y` down); the
//! camera sits at the field centre with `y` up, so every position goes through
//! [`screen_to_world`].

use crate::body::Field;
use crate::config::GameConfig;
use crate::frame::{Frame, HudText, SpriteDraw, TextAnchor, TextureId};
use crate::graphics::{load_game_textures, setup_camera, GameTextures};
use crate::session::{FrameSet, Session};
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Sprite spawned for the presented frame; replaced when the sprites change.
#[derive(Component)]
pub struct FrameSprite;

/// Root node of one HUD text line.
#[derive(Component)]
pub struct FrameText;

// ── Coordinate helpers ────────────────────────────────────────────────────────

/// Convert a screen-space point to world space for a camera centred on the field.
#[inline]
pub fn screen_to_world(field: Field, point: Vec2) -> Vec2 {
    Vec2::new(point.x - field.width / 2.0, field.height / 2.0 - point.y)
}

/// UI `top` offset for a HUD line.
///
/// Top-left lines are positioned by their baseline, so the node starts one
/// font size above it; centred lines are shifted up by half a font size.
#[inline]
pub fn hud_top(text: &HudText) -> f32 {
    match text.anchor {
        TextAnchor::TopLeft => text.position.y - text.font_size,
        TextAnchor::Center => text.position.y - text.font_size / 2.0,
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Camera, textures, and frame presentation.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTextures>()
            .add_systems(Startup, (setup_camera, load_game_textures))
            .add_systems(Update, present_frame_system.in_set(FrameSet::Present));
    }
}

// ── Update: present ───────────────────────────────────────────────────────────

/// Background and sprites last handed to the ECS.
type PresentedSprites = Option<(TextureId, Vec<SpriteDraw>)>;

/// Rebuild the sprites and the HUD text, each only when it changed.
///
/// Update runs more often than the fixed tick and the frame is frozen after
/// game over, so most calls change nothing.
pub fn present_frame_system(
    mut commands: Commands,
    session: Res<Session>,
    textures: Res<GameTextures>,
    config: Res<GameConfig>,
    sprites: Query<Entity, With<FrameSprite>>,
    texts: Query<Entity, With<FrameText>>,
    mut presented_sprites: Local<PresentedSprites>,
    mut presented_hud: Local<Vec<HudText>>,
) {
    let field = config.field();
    let frame: &Frame = &session.frame;

    let sprites_current = presented_sprites.as_ref().is_some_and(|(background, draws)| {
        *background == frame.background && *draws == frame.sprites
    });
    if !sprites_current {
        for entity in sprites.iter() {
            commands.entity(entity).despawn();
        }
        spawn_sprites(&mut commands, &textures, field, frame);
        *presented_sprites = Some((frame.background, frame.sprites.clone()));
    }

    if *presented_hud == frame.texts {
        return;
    }
    for entity in texts.iter() {
        commands.entity(entity).despawn();
    }
    for text in &frame.texts {
        spawn_hud_text(&mut commands, text);
    }
    *presented_hud = frame.texts.clone();
}

fn spawn_sprites(commands: &mut Commands, textures: &GameTextures, field: Field, frame: &Frame) {
    commands.spawn((
        Sprite {
            image: textures.handle(frame.background),
            custom_size: Some(Vec2::new(field.width, field.height)),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, -1.0)),
        FrameSprite,
    ));

    let count = frame.sprites.len().max(1) as f32;
    for (i, draw) in frame.sprites.iter().enumerate() {
        // Later sprites draw on top; keep z within [0, 0.1].
        let z = 0.1 * i as f32 / count;
        spawn_sprite(commands, textures, field, draw, z);
    }
}

fn spawn_sprite(
    commands: &mut Commands,
    textures: &GameTextures,
    field: Field,
    draw: &SpriteDraw,
    z: f32,
) {
    let world = screen_to_world(field, draw.center);
    commands.spawn((
        Sprite {
            image: textures.handle(draw.texture),
            custom_size: Some(Vec2::splat(draw.size)),
            ..default()
        },
        Transform::from_translation(world.extend(z)),
        FrameSprite,
    ));
}

fn spawn_hud_text(commands: &mut Commands, text: &HudText) {
    let node = match text.anchor {
        TextAnchor::TopLeft => Node {
            position_type: PositionType::Absolute,
            left: Val::Px(text.position.x),
            top: Val::Px(hud_top(text)),
            ..default()
        },
        // Full-width row centred on the anchor's column.
        TextAnchor::Center => Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            width: Val::Px(text.position.x * 2.0),
            top: Val::Px(hud_top(text)),
            justify_content: JustifyContent::Center,
            ..default()
        },
    };

    commands
        .spawn((node, ZIndex(200), FrameText))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text.text.clone()),
                TextFont {
                    font_size: text.font_size,
                    ..default()
                },
                TextColor(Color::srgb(text.shade, text.shade, text.shade)),
            ));
        });
}
