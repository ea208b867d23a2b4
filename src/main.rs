use bevy::prelude::*;
use bevy::window::WindowResolution;

use gem_rush::config::load_game_config;
use gem_rush::menu::GameOverPlugin;
use gem_rush::rendering::RenderingPlugin;
use gem_rush::session::SessionPlugin;

fn main() {
    // The window is sized from the config, so it must be read before the app exists.
    let config = load_game_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: WindowResolution::new(
                    config.field_width.round() as u32,
                    config.field_height.round() as u32,
                ),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(SessionPlugin { config })
        .add_plugins(GameOverPlugin)
        .add_plugins(RenderingPlugin)
        .run();
}
