//! Screen state and the restart control.
//!
//! ## States
//!
//! | State      | Description                                        |
//! |------------|----------------------------------------------------|
//! | `Playing`  | Initial state; the game is running                 |
//! | `GameOver` | Ship destroyed; restart button overlay is visible  |
//!
//! Transitions are driven by [`crate::game::GameEvent::GameOverChanged`],
//! forwarded by [`crate::session::session_tick_system`].  The game state itself
//! never knows the button exists.
//!
//! ## Systems (registered by `GameOverPlugin`)
//!
//! | System                  | Schedule                      | Purpose                       |
//! |-------------------------|-------------------------------|-------------------------------|
//! | `setup_game_over`       | `OnEnter(GameOver)`           | Spawn the restart button      |
//! | `cleanup_game_over`     | `OnExit(GameOver)`            | Despawn the overlay           |
//! | `restart_button_system` | `Update / in GameOver`        | Restart on click or Enter     |

mod game_over;

use crate::session::FrameSet;
use bevy::prelude::*;

pub use game_over::{
    cleanup_game_over, restart_button_system, restart_button_top, setup_game_over,
};

// ── Screen state ──────────────────────────────────────────────────────────────

/// Top-level screen state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenState {
    /// Active gameplay.
    #[default]
    Playing,
    /// Play frozen; restart control shown.
    GameOver,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the "Restart Game" button.
#[derive(Component)]
pub struct RestartButton;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `ScreenState`, the overlay setup/teardown, and the button handler.
pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ScreenState>()
            .add_systems(OnEnter(ScreenState::GameOver), setup_game_over)
            .add_systems(OnExit(ScreenState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                restart_button_system
                    .in_set(FrameSet::Input)
                    .run_if(in_state(ScreenState::GameOver)),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn restart_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
fn restart_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
fn restart_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
