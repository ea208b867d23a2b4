//! Headless tests for the session driver and the game-over screen flow.
//!
//! These tests use [`MinimalPlugins`] (no window, no rendering) so they run
//! fast and deterministically in CI.  Asteroids are configured with zero speed
//! so nothing drifts into the ship unless a test stages it.  Time advances by a
//! manual 1/60 s per update, so every update after the first runs exactly one
//! fixed tick.
//!
//! Covered scenarios:
//! 1. Default screen is `Playing` and the first tick produces a full frame.
//! 2. Held keys move the ship through the `DirectionSet` resource.
//! 3. An asteroid hit moves the screen to `GameOver` and spawns the overlay.
//! 4. Enter on the game-over screen restarts and returns to `Playing`.
//! 5. The high score survives a restart.
//! 6. Ship speed does not depend on the update rate.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use gem_rush::constants::SHIP_SPEED;
use gem_rush::asteroid::Asteroid;
use gem_rush::config::GameConfig;
use gem_rush::gem::{Gem, GemVariant};
use gem_rush::menu::{GameOverPlugin, GameOverRoot, ScreenState};
use gem_rush::session::{Session, SessionPlugin};
use gem_rush::ship::Ship;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> GameConfig {
    GameConfig {
        rng_seed: Some(2024),
        asteroid_max_speed: 0.0,
        ..Default::default()
    }
}

/// Build a headless app with the session and game-over plugins.
fn build_app() -> App {
    build_app_at(60.0)
}

/// Headless app whose clock advances `1 / update_hz` seconds per update.
fn build_app_at(update_hz: f64) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / update_hz,
    )));
    app.add_plugins(SessionPlugin {
        config: test_config(),
    });
    app.add_plugins(GameOverPlugin);
    app
}

fn screen(app: &App) -> ScreenState {
    *app.world().resource::<State<ScreenState>>().get()
}

fn session(app: &App) -> &Session {
    app.world().resource::<Session>()
}

fn overlay_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<GameOverRoot>>()
        .iter(app.world())
        .count()
}

/// Ship at the centre, one far gem, and one parked asteroid at `asteroid_pos`.
fn stage(app: &mut App, gems: Vec<Vec2>, asteroid_pos: Vec2) {
    let config = test_config();
    let ship = Ship::new(&config);
    let gems = gems
        .into_iter()
        .map(|p| Gem::at(p, GemVariant::Blue, &config))
        .collect();
    let asteroids = vec![Asteroid::at(asteroid_pos, Vec2::ZERO, &config)];
    app.world_mut()
        .resource_mut::<Session>()
        .game
        .set_bodies(ship, gems, asteroids);
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release_all(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
}

/// Stage a collision that scores `gems_on_ship` points, then let the screen settle.
fn crash(app: &mut App, gems_on_ship: usize) {
    let mut gems = vec![Vec2::new(400.0, 300.0); gems_on_ship];
    gems.push(Vec2::new(50.0, 50.0));
    stage(app, gems, Vec2::new(400.0, 320.0));
    app.update(); // tick: collision, NextState(GameOver)
    app.update(); // StateTransition fires; overlay spawned
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn starts_playing_with_a_full_frame() {
    let mut app = build_app();
    app.update();

    assert_eq!(screen(&app), ScreenState::Playing);
    let session = session(&app);
    assert_eq!(session.game.level(), 1);
    // 4 gems + 2 asteroids + ship
    assert_eq!(session.frame.sprites.len(), 7);
    assert!(!session.frame.show_restart);
}

#[test]
fn held_keys_move_the_ship() {
    let mut app = build_app();
    app.update();
    stage(&mut app, vec![Vec2::new(50.0, 50.0)], Vec2::new(700.0, 500.0));

    press(&mut app, KeyCode::KeyD);
    press(&mut app, KeyCode::ArrowUp);
    app.update();

    let pos = session(&app).game.ship().position;
    assert_eq!(pos, Vec2::new(405.0, 295.0));

    release_all(&mut app);
    app.update();
    assert_eq!(session(&app).game.ship().position, pos);
}

#[test]
fn asteroid_hit_shows_game_over_overlay() {
    let mut app = build_app();
    app.update();
    assert_eq!(overlay_count(&mut app), 0);

    crash(&mut app, 0);

    assert_eq!(screen(&app), ScreenState::GameOver);
    assert!(session(&app).game.is_game_over());
    assert!(session(&app).frame.show_restart);
    assert_eq!(overlay_count(&mut app), 1);
}

#[test]
fn enter_restarts_and_returns_to_playing() {
    let mut app = build_app();
    app.update();
    crash(&mut app, 0);
    assert_eq!(screen(&app), ScreenState::GameOver);

    press(&mut app, KeyCode::Enter);
    app.update(); // restart() in Update
    app.update(); // tick drains GameOverChanged(false)
    app.update(); // StateTransition back to Playing; overlay removed

    assert_eq!(screen(&app), ScreenState::Playing);
    assert_eq!(overlay_count(&mut app), 0);
    let game = &session(&app).game;
    assert!(!game.is_game_over());
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.gems().len(), 4);
    assert_eq!(game.asteroids().len(), 2);
}

#[test]
fn high_score_survives_restart() {
    let mut app = build_app();
    app.update();
    crash(&mut app, 3);
    assert_eq!(session(&app).game.high_score(), 3);

    press(&mut app, KeyCode::Enter);
    app.update();
    app.update();
    app.update();
    release_all(&mut app);

    let game = &session(&app).game;
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 3);
}

#[test]
fn enter_while_playing_does_nothing() {
    let mut app = build_app();
    app.update();
    stage(&mut app, vec![Vec2::new(50.0, 50.0)], Vec2::new(700.0, 500.0));

    press(&mut app, KeyCode::Enter);
    app.update();
    app.update();

    assert_eq!(screen(&app), ScreenState::Playing);
    assert_eq!(session(&app).game.gems().len(), 1);
}

/// Hold `KeyD` for half a second of simulated time at `update_hz` updates per
/// second and return how far the ship moved.
fn distance_in_half_second(update_hz: f64) -> f32 {
    let mut app = build_app_at(update_hz);
    app.update(); // first update has a zero delta
    stage(&mut app, vec![Vec2::new(50.0, 50.0)], Vec2::new(700.0, 500.0));

    press(&mut app, KeyCode::KeyD);
    let updates = (update_hz * 0.5).round() as usize;
    for _ in 0..updates {
        app.update();
    }
    session(&app).game.ship().position.x - 400.0
}

#[test]
fn ship_speed_is_independent_of_update_rate() {
    let at_60 = distance_in_half_second(60.0);
    let at_144 = distance_in_half_second(144.0);

    assert!((at_60 - 150.0).abs() <= SHIP_SPEED, "60 Hz moved {at_60}");
    assert!(
        (at_60 - at_144).abs() <= SHIP_SPEED,
        "60 Hz moved {at_60}, 144 Hz moved {at_144}"
    );
}
