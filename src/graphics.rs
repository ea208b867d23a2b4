use crate::frame::TextureId;
use crate::gem::GemVariant;
use bevy::prelude::*;

/// Image handles for every [`TextureId`].
///
/// Loaded once by [`load_game_textures`] before the first frame is presented
/// and read-only afterwards.
#[derive(Resource, Default, Clone)]
pub struct GameTextures {
    pub background: Handle<Image>,
    pub ship: Handle<Image>,
    pub asteroid: Handle<Image>,
    pub red_gem: Handle<Image>,
    pub green_gem: Handle<Image>,
    pub blue_gem: Handle<Image>,
}

impl GameTextures {
    /// Handle for a texture id.
    pub fn handle(&self, id: TextureId) -> Handle<Image> {
        match id {
            TextureId::Background => self.background.clone(),
            TextureId::Ship => self.ship.clone(),
            TextureId::Asteroid => self.asteroid.clone(),
            TextureId::Gem(GemVariant::Red) => self.red_gem.clone(),
            TextureId::Gem(GemVariant::Green) => self.green_gem.clone(),
            TextureId::Gem(GemVariant::Blue) => self.blue_gem.clone(),
        }
    }
}

/// Asset path for a texture id, relative to `assets/`.
pub fn texture_path(id: TextureId) -> &'static str {
    match id {
        TextureId::Background => "images/SpaceBG.png",
        TextureId::Ship => "images/Spaceship.png",
        TextureId::Asteroid => "images/Asteroid.png",
        TextureId::Gem(GemVariant::Red) => "images/RedGem.png",
        TextureId::Gem(GemVariant::Green) => "images/GreenGem.png",
        TextureId::Gem(GemVariant::Blue) => "images/BlueGem.png",
    }
}

/// Queue every game image for loading.
pub fn load_game_textures(mut textures: ResMut<GameTextures>, asset_server: Res<AssetServer>) {
    let load = |id: TextureId| -> Handle<Image> { asset_server.load(texture_path(id)) };
    *textures = GameTextures {
        background: load(TextureId::Background),
        ship: load(TextureId::Ship),
        asteroid: load(TextureId::Asteroid),
        red_gem: load(TextureId::Gem(GemVariant::Red)),
        green_gem: load(TextureId::Gem(GemVariant::Green)),
        blue_gem: load(TextureId::Gem(GemVariant::Blue)),
    };
    info!("[setup] Game textures queued");
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Window and field share a size, so the default camera shows the whole field.
    commands.spawn(Camera2d);
    info!("[setup] Camera spawned");
}
