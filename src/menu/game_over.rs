use super::*;
use crate::config::GameConfig;
use crate::constants::RESTART_BUTTON_OFFSET_Y;
use crate::session::Session;

const BUTTON_WIDTH: f32 = 220.0;
const BUTTON_HEIGHT: f32 = 50.0;

/// UI `top` of the restart button: its top edge sits a fixed offset below the
/// field centre.
pub fn restart_button_top(field_height: f32) -> f32 {
    field_height / 2.0 + RESTART_BUTTON_OFFSET_Y
}

/// Spawn the restart button centred horizontally below the high-score line.
///
/// The "GAME OVER" banner and high score are part of the frame HUD; this
/// overlay only adds the control.
pub fn setup_game_over(mut commands: Commands, config: Res<GameConfig>) {
    let top = restart_button_top(config.field_height);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(top),
                ..default()
            },
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(BUTTON_WIDTH),
                        height: Val::Px(BUTTON_HEIGHT),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(restart_bg()),
                    BorderColor::all(restart_border()),
                    RestartButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Restart Game"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(restart_text()),
                    ));
                });
        });
}

/// Recursively despawn all game-over overlay entities.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Restart on button press or Enter; tint the label on hover.
///
/// Only calls [`crate::game::GameState::restart`].  The resulting
/// `GameOverChanged(false)` event is what moves the screen back to `Playing`.
pub fn restart_button_system(
    query: Query<(&Interaction, &Children), (Changed<Interaction>, With<RestartButton>)>,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<Session>,
) {
    let wants_restart = keys.just_pressed(KeyCode::Enter)
        || query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_restart {
        if session.game.is_game_over() {
            let session = &mut *session;
            session.game.restart();
            session.frame = session.game.frame();
        }
        return;
    }

    for (interaction, children) in query.iter() {
        let color = match interaction {
            Interaction::Hovered => Color::WHITE,
            Interaction::None => restart_text(),
            Interaction::Pressed => continue,
        };
        for child in children.iter() {
            if let Ok(mut text_color) = btn_text.get_mut(child) {
                *text_color = TextColor(color);
            }
        }
    }
}
