//! Gem Rush game library
//!
//! A small arcade game: steer a ship around a bounded field, collect every gem
//! to clear the level, and avoid the drifting asteroids.  The game logic in
//! [`game`] is plain Rust driven one tick per frame; the Bevy front end
//! ([`session`], [`rendering`], [`menu`]) samples input, presents the returned
//! frame, and shows the restart control.

pub mod asteroid;
pub mod body;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod game;
pub mod gem;
pub mod graphics;
pub mod input;
pub mod menu;
pub mod rendering;
pub mod session;
pub mod ship;
