//! Session state
//!
//! Everything the selection screens and the play loop read or mutate lives
//! in one `GameState`, passed explicitly into every call.

use glam::Vec2;
use serde::Serialize;

use super::entity::{EntitySnapshot, Hero, Projectile, Villain};
use super::layout::{HitRegion, start_button};
use crate::roster::Roster;
use crate::tuning::Tuning;

/// Current screen of the select-then-play flow. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SessionPhase {
    /// Title screen with the Start button
    Start,
    /// Hero portraits
    CharacterSelect,
    /// Suit skins for the chosen hero
    SuitSelect,
    /// Hero on screen, villain taking hits
    Playing,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: SessionPhase,
    /// Canvas size in CSS pixels
    pub viewport: Vec2,
    pub roster: Roster,
    /// Index into `roster`
    pub chosen_hero: Option<usize>,
    /// Index into `available_suits`
    pub chosen_suit: Option<usize>,
    /// Suit keys of the chosen hero that actually loaded
    pub available_suits: Vec<String>,
    /// Options laid out for the active selection screen
    pub options: Vec<HitRegion>,
    pub hero: Option<Hero>,
    pub villain: Villain,
    /// Webs in flight, oldest first
    pub projectiles: Vec<Projectile>,
    /// Host timestamp (ms) of the last successful shot
    pub last_shot_time: Option<f64>,
    /// Frames simulated while Playing
    pub frame_count: u64,
}

impl GameState {
    pub fn new(viewport: Vec2, roster: Roster, tuning: &Tuning) -> Self {
        Self {
            phase: SessionPhase::Start,
            viewport,
            roster,
            chosen_hero: None,
            chosen_suit: None,
            available_suits: Vec::new(),
            options: Vec::new(),
            hero: None,
            villain: Villain::for_viewport(viewport, tuning.villain_size, tuning.villain_health),
            projectiles: Vec::new(),
            last_shot_time: None,
            frame_count: 0,
        }
    }

    /// Regions a click can hit on the current screen
    pub fn hit_regions(&self) -> Vec<HitRegion> {
        match self.phase {
            SessionPhase::Start => vec![HitRegion {
                id: 0,
                asset_key: String::new(),
                rect: start_button(self.viewport.x),
            }],
            SessionPhase::CharacterSelect | SessionPhase::SuitSelect => self.options.clone(),
            SessionPhase::Playing => Vec::new(),
        }
    }

    /// JSON snapshot for debug logs
    pub fn debug_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable state: {e}>"))
    }

    /// Hero, villain, then projectiles in spawn order
    pub fn entity_snapshots(&self) -> Vec<EntitySnapshot<'_>> {
        let mut out = Vec::with_capacity(self.projectiles.len() + 2);
        if let Some(hero) = &self.hero {
            out.push(hero.snapshot());
        }
        out.push(self.villain.snapshot());
        out.extend(self.projectiles.iter().map(Projectile::snapshot));
        out
    }
}
