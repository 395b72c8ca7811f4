//! Heroes Unleashed - pick a hero, pick a suit, web the villain
//!
//! Core modules:
//! - `sim`: Selection state machine and per-frame simulation (no platform dependencies)
//! - `input`: Held-key set and click queue fed by the host
//! - `assets`: Asset keys, load status registry, and the "all settled" gate
//! - `roster`: Hero catalogue
//! - `tuning`: Data-driven gameplay numbers
//! - `driver`: Frame driver and the renderer seam
//! - `platform`: Browser glue (Canvas2D renderer, image loading, DOM events)

pub mod assets;
pub mod driver;
pub mod input;
pub mod platform;
pub mod roster;
pub mod sim;
pub mod tuning;

pub use assets::{AssetError, AssetRegistry, AssetSource, AssetStatus};
pub use driver::{FrameView, Game, Renderer};
pub use input::{InputCollector, Key};
pub use roster::{HeroProfile, Roster};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Hero sprite edge length
    pub const HERO_SIZE: f32 = 50.0;
    /// Hero movement per frame (pixels)
    pub const HERO_SPEED: f32 = 5.0;
    /// Gap between the hero and the bottom edge at spawn
    pub const HERO_BOTTOM_MARGIN: f32 = 10.0;

    /// Villain sprite edge length
    pub const VILLAIN_SIZE: f32 = 50.0;
    /// Villain starting (and maximum) health
    pub const VILLAIN_HEALTH: u32 = 5;

    /// Projectile ("web") edge length
    pub const PROJECTILE_SIZE: f32 = 20.0;
    /// Projectile movement per frame (pixels)
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Minimum time between shots (ms, strict)
    pub const FIRE_COOLDOWN_MS: f64 = 250.0;

    /// Start button, centred horizontally
    pub const START_BUTTON_WIDTH: f32 = 200.0;
    pub const START_BUTTON_HEIGHT: f32 = 50.0;
    pub const START_BUTTON_TOP: f32 = 130.0;

    /// Number of suit slots each hero may ship
    pub const SUIT_SLOTS: usize = 3;

    /// Health bar geometry (drawn above the villain)
    pub const HEALTH_BAR_WIDTH: f32 = 50.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 5.0;
    pub const HEALTH_BAR_OFFSET: f32 = 10.0;
}

/// Sign of a key pair: +1 if only `positive` is held, -1 if only `negative`, else 0
#[inline]
pub fn axis(negative: bool, positive: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}
