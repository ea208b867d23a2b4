//! Keyboard → movement input.
//!
//! Input is sampled once per frame into a [`DirectionSet`]: the set of logical
//! directions currently held.  Nothing is buffered; holding a key is a
//! continuous push for as long as it is down.
//!
//! WASD and the arrow keys are bound to the same four directions, so either
//! cluster (or a mix) moves the ship identically.
//!
//! The [`DirectionSet`] doubles as the Bevy resource written by
//! [`keyboard_to_directions_system`] and read by the session driver; tests can
//! populate it directly to steer the ship without a keyboard.

use bevy::prelude::*;

/// Logical movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Directions held during the current frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionSet {
    /// No directions held.
    pub const NONE: DirectionSet = DirectionSet {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Set built from a list of held directions.
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut set = Self::NONE;
        for &d in directions {
            set.insert(d);
        }
        set
    }

    pub fn insert(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Screen-space displacement for one frame at `speed` pixels per direction.
    ///
    /// Up is `-y` (screen `y` grows downward).  Opposing directions cancel.
    pub fn displacement(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        delta
    }
}

/// Movement direction bound to `key`, if any.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Fold every held key into a [`DirectionSet`].
pub fn directions_from_keys<'a>(keys: impl IntoIterator<Item = &'a KeyCode>) -> DirectionSet {
    let mut set = DirectionSet::NONE;
    for key in keys {
        if let Some(direction) = direction_for_key(*key) {
            set.insert(direction);
        }
    }
    set
}

/// Overwrite the [`DirectionSet`] resource with this frame's held keys.
pub fn keyboard_to_directions_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut held: ResMut<DirectionSet>,
) {
    *held = directions_from_keys(keys.get_pressed());
}
