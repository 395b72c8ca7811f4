//! Session and simulation module
//!
//! All gameplay logic lives here. This module is pure:
//! - One explicit `GameState` passed into every call (no globals)
//! - Frame-locked updates (one `step` per host frame, no accumulator)
//! - Stable iteration order (projectiles kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod layout;
pub mod selection;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, contains_point};
pub use entity::{
    EntityKind, EntitySnapshot, HealthState, Hero, Projectile, ProjectileMotion, Rect, Villain,
};
pub use layout::{GridSpec, HitRegion, grid_layout, items_per_row, start_button};
pub use selection::on_click;
pub use state::{GameState, SessionPhase};
pub use tick::{StepReport, TickInput, fire_direction, step};
