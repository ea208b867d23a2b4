//! Bevy glue that drives [`GameState`] at a fixed rate.
//!
//! ## Frame pipeline (chained via [`FrameSet`])
//!
//! | Schedule      | Set        | Systems                                    |
//! |---------------|------------|--------------------------------------------|
//! | `FixedUpdate` | `Input`    | keyboard → [`DirectionSet`]                |
//! | `FixedUpdate` | `Simulate` | [`session_tick_system`]                    |
//! | `Update`      | `Input`    | restart button / Enter                     |
//! | `Update`      | `Present`  | [`crate::rendering::present_frame_system`] |
//!
//! Speeds are pixels per tick, so ticks run on `Time<Fixed>` at
//! [`TICK_RATE_HZ`] rather than once per rendered frame.  Edge-triggered input
//! (`just_pressed`) is only reliable in `Update`, which is why restart stays
//! there.
//!
//! `GameState` never touches the ECS.  [`session_tick_system`] is the only
//! place that calls [`GameState::tick`]; it stores the resulting [`Frame`] and
//! turns drained [`GameEvent`]s into [`ScreenState`] transitions, which is how
//! the restart overlay gets shown and hidden.

use crate::config::GameConfig;
use crate::constants::TICK_RATE_HZ;
use crate::frame::Frame;
use crate::game::{GameEvent, GameState};
use crate::input::{keyboard_to_directions_system, DirectionSet};
use crate::menu::ScreenState;
use bevy::prelude::*;

/// Ordering of the per-frame work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Present,
}

/// The running game plus the frame it last produced.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub game: GameState,
    pub frame: Frame,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let game = GameState::new(config);
        let frame = game.frame();
        Self { game, frame }
    }

    pub fn from_game(game: GameState) -> Self {
        let frame = game.frame();
        Self { game, frame }
    }
}

/// Advance the game one tick with the currently held directions.
pub fn session_tick_system(
    mut session: ResMut<Session>,
    held: Res<DirectionSet>,
    mut next_state: ResMut<NextState<ScreenState>>,
) {
    let session = &mut *session;
    session.frame = session.game.tick(*held);

    for event in session.game.drain_events() {
        match event {
            GameEvent::GameOverChanged(true) => next_state.set(ScreenState::GameOver),
            GameEvent::GameOverChanged(false) => next_state.set(ScreenState::Playing),
            GameEvent::LevelStarted(level) => debug!("[session] Level {level} on screen"),
            GameEvent::GemCollected { score } => debug!("[session] Gem collected, score {score}"),
        }
    }
}

/// Registers the session resources and the input → simulate pipeline.
///
/// Rendering and the restart overlay live in their own plugins so this one can
/// run headless under `MinimalPlugins`.
pub struct SessionPlugin {
    pub config: GameConfig,
}

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Session::new(self.config.clone()))
            .init_resource::<DirectionSet>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .configure_sets(
                FixedUpdate,
                (FrameSet::Input, FrameSet::Simulate).chain(),
            )
            .configure_sets(Update, (FrameSet::Input, FrameSet::Present).chain())
            .add_systems(
                FixedUpdate,
                (
                    keyboard_to_directions_system.in_set(FrameSet::Input),
                    session_tick_system.in_set(FrameSet::Simulate),
                ),
            );
    }
}
