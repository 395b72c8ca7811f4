//! Frame driver
//!
//! Called once per host animation frame. Each frame applies queued clicks,
//! steps the simulation if playing, then renders exactly once.

use glam::Vec2;
use serde::Serialize;

use crate::assets::{AssetRegistry, AssetSource};
use crate::input::InputCollector;
use crate::roster::Roster;
use crate::sim::{EntitySnapshot, GameState, HitRegion, SessionPhase, StepReport, on_click, step};
use crate::tuning::Tuning;

/// Everything a render hook may read for one frame
#[derive(Debug, Serialize)]
pub struct FrameView<'a> {
    pub phase: SessionPhase,
    pub viewport: Vec2,
    /// Hero (if any), villain, then projectiles
    pub entities: Vec<EntitySnapshot<'a>>,
    /// Clickable regions of the active screen; empty while playing
    pub hit_regions: Vec<HitRegion>,
    /// Display names for character select, aligned with `hit_regions` ids
    pub hero_names: Vec<&'a str>,
}

/// The external drawing collaborator
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub tuning: Tuning,
    pub input: InputCollector,
    /// Set by the host once every required asset has settled
    assets_ready: bool,
    last_phase: SessionPhase,
}

impl Game {
    pub fn new(viewport: Vec2, roster: Roster, tuning: Tuning) -> Self {
        let state = GameState::new(viewport, roster, &tuning);
        let last_phase = state.phase;
        Self {
            state,
            tuning,
            input: InputCollector::new(),
            assets_ready: false,
            last_phase,
        }
    }

    pub fn assets_ready(&self) -> bool {
        self.assets_ready
    }

    /// Open the asset gate
    pub fn mark_assets_ready(&mut self) {
        if !self.assets_ready {
            log::info!("Assets settled, starting");
        }
        self.assets_ready = true;
    }

    /// Open the gate only once every required key has loaded or failed.
    /// Returns whether the gate is open.
    pub fn open_gate_when_settled<H, S: AsRef<str>>(
        &mut self,
        assets: &AssetRegistry<H>,
        required: &[S],
    ) -> bool {
        if assets.all_settled(required) {
            self.mark_assets_ready();
        }
        self.assets_ready
    }

    /// Build the render-facing view of the current state
    pub fn view(&self) -> FrameView<'_> {
        let hero_names = match self.state.phase {
            SessionPhase::CharacterSelect => self
                .state
                .roster
                .heroes
                .iter()
                .map(|h| h.name.as_str())
                .collect(),
            _ => Vec::new(),
        };
        FrameView {
            phase: self.state.phase,
            viewport: self.state.viewport,
            entities: self.state.entity_snapshots(),
            hit_regions: self.state.hit_regions(),
            hero_names,
        }
    }

    /// Run one host frame. Returns the step report if the simulation ran.
    pub fn frame<A, R>(&mut self, now: f64, assets: &A, renderer: &mut R) -> Option<StepReport>
    where
        A: AssetSource,
        R: Renderer + ?Sized,
    {
        if !self.assets_ready {
            return None;
        }

        for click in self.input.drain_clicks() {
            on_click(&mut self.state, click, assets, &self.tuning);
        }

        let report = if self.state.phase == SessionPhase::Playing {
            let input = self.input.tick_input();
            Some(step(&mut self.state, &input, now, &self.tuning))
        } else {
            None
        };

        if self.state.phase != self.last_phase {
            if self.state.phase == SessionPhase::Playing {
                log::info!(
                    "Playing as {}",
                    self.state
                        .hero
                        .as_ref()
                        .map(|h| h.sprite_key.as_str())
                        .unwrap_or("?")
                );
            }
            log::debug!("Entered {:?}: {}", self.state.phase, self.state.debug_json());
            self.last_phase = self.state.phase;
        }

        renderer.render(&self.view());
        report
    }
}
