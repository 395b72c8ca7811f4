//! Input collector
//!
//! Tracks which game keys are held and queues clicks until the next frame.
//! Keys are identified by DOM `KeyboardEvent.code` strings so layout does not
//! matter. No game logic lives here.

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use crate::sim::TickInput;

/// Game-relevant keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a `KeyboardEvent.code` to a game key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Held keys plus pending clicks
#[derive(Debug, Default)]
pub struct InputCollector {
    held: HashSet<Key>,
    clicks: VecDeque<Vec2>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the code maps to a game key (caller may prevent default)
    pub fn key_down(&mut self, code: &str) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.held.insert(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.held.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Drop every held key (focus lost, keyup events will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Queue a click in canvas-local coordinates
    pub fn click(&mut self, x: f32, y: f32) {
        self.clicks.push_back(Vec2::new(x, y));
    }

    /// Take all queued clicks, oldest first
    pub fn drain_clicks(&mut self) -> Vec<Vec2> {
        self.clicks.drain(..).collect()
    }

    /// Snapshot of held keys for this frame
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            fire: self.is_held(Key::Fire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("Space"), Some(Key::Fire));
        assert_eq!(Key::from_code("KeyA"), None);
    }

    #[test]
    fn test_hold_and_release() {
        let mut input = InputCollector::new();
        assert!(input.key_down("ArrowUp"));
        assert!(input.key_down("Space"));
        assert!(!input.key_down("Enter"));

        let snapshot = input.tick_input();
        assert!(snapshot.up && snapshot.fire);
        assert!(!snapshot.down && !snapshot.left && !snapshot.right);

        input.key_up("ArrowUp");
        assert!(!input.tick_input().up);
        assert!(input.tick_input().fire);

        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_repeat_keydown_is_idempotent() {
        let mut input = InputCollector::new();
        input.key_down("ArrowRight");
        input.key_down("ArrowRight");
        input.key_up("ArrowRight");
        assert!(!input.is_held(Key::Right));
    }

    #[test]
    fn test_clicks_drain_in_order() {
        let mut input = InputCollector::new();
        input.click(1.0, 2.0);
        input.click(3.0, 4.0);
        assert_eq!(
            input.drain_clicks(),
            vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]
        );
        assert!(input.drain_clicks().is_empty());
    }
}
