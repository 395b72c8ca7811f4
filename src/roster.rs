//! Hero catalogue
//!
//! Each hero ships a main sprite, a selection portrait, and up to
//! `SUIT_SLOTS` suit sprites. Asset keys are file names under `assets/`.

use serde::{Deserialize, Serialize};

use crate::consts::SUIT_SLOTS;
use crate::sim::{Projectile, Villain};

/// Heroes available on the character select screen, in display order
pub const DEFAULT_HEROES: &[&str] = &["Spiderman", "Batman", "Deadpool", "Gambit", "Test"];

/// One selectable hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProfile {
    /// Display name
    pub name: String,
    /// Lowercase stem shared by all of this hero's asset keys
    pub key: String,
}

impl HeroProfile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            key: name.to_lowercase(),
        }
    }

    /// In-game sprite
    pub fn main_key(&self) -> String {
        format!("{}.png", self.key)
    }

    /// Portrait on the character select screen
    pub fn select_key(&self) -> String {
        format!("{}_select.png", self.key)
    }

    /// All suit slots (1-based in file names), whether or not they exist
    pub fn suit_keys(&self) -> Vec<String> {
        (1..=SUIT_SLOTS)
            .map(|i| format!("{}_suit{}.png", self.key, i))
            .collect()
    }
}

/// The ordered hero list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub heroes: Vec<HeroProfile>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::from_names(DEFAULT_HEROES)
    }
}

impl Roster {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            heroes: names.iter().map(|n| HeroProfile::new(n.as_ref())).collect(),
        }
    }

    pub fn get(&self, id: usize) -> Option<&HeroProfile> {
        self.heroes.get(id)
    }

    /// Portrait keys in display order
    pub fn select_keys(&self) -> Vec<String> {
        self.heroes.iter().map(HeroProfile::select_key).collect()
    }

    /// Every asset the game may draw: per-hero sprites plus villain and web
    pub fn required_assets(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.heroes.len() * (2 + SUIT_SLOTS) + 2);
        for hero in &self.heroes {
            keys.push(hero.main_key());
            keys.push(hero.select_key());
            keys.extend(hero.suit_keys());
        }
        keys.push(Villain::SPRITE_KEY.to_string());
        keys.push(Projectile::SPRITE_KEY.to_string());
        keys
    }
}
