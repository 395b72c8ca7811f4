//! Data-driven gameplay numbers
//!
//! Defaults match the shipped game. A JSON override can be stored in
//! LocalStorage; missing fields fall back to defaults, including fields
//! inside the grid tables.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::sim::GridSpec;

/// Errors from parsing or validating a tuning override
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning JSON: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning value {field}: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Hero ===
    /// Hero sprite edge (pixels)
    pub hero_size: f32,
    /// Pixels per frame per held arrow
    pub hero_speed: f32,

    // === Villain ===
    pub villain_size: f32,
    pub villain_health: u32,

    // === Projectiles ===
    pub projectile_size: f32,
    /// Pixels per frame
    pub projectile_speed: f32,
    /// Minimum ms between shots (strict)
    pub fire_cooldown_ms: f64,

    // === Selection screens ===
    #[serde(deserialize_with = "hero_grid_override")]
    pub hero_grid: GridSpec,
    #[serde(deserialize_with = "suit_grid_override")]
    pub suit_grid: GridSpec,
}

/// Grid fields as they may appear in an override; absent ones keep the base
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridOverride {
    box_size: Option<f32>,
    spacing: Option<f32>,
    top: Option<f32>,
    row_pitch: Option<f32>,
}

impl GridOverride {
    fn apply(self, base: GridSpec) -> GridSpec {
        GridSpec {
            box_size: self.box_size.unwrap_or(base.box_size),
            spacing: self.spacing.unwrap_or(base.spacing),
            top: self.top.unwrap_or(base.top),
            row_pitch: self.row_pitch.unwrap_or(base.row_pitch),
        }
    }
}

fn hero_grid_override<'de, D: Deserializer<'de>>(d: D) -> Result<GridSpec, D::Error> {
    Ok(GridOverride::deserialize(d)?.apply(Tuning::default().hero_grid))
}

fn suit_grid_override<'de, D: Deserializer<'de>>(d: D) -> Result<GridSpec, D::Error> {
    Ok(GridOverride::deserialize(d)?.apply(Tuning::default().suit_grid))
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hero_size: HERO_SIZE,
            hero_speed: HERO_SPEED,

            villain_size: VILLAIN_SIZE,
            villain_health: VILLAIN_HEALTH,

            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            hero_grid: GridSpec {
                box_size: HERO_SIZE * 1.5,
                spacing: 40.0,
                top: 200.0,
                row_pitch: 200.0,
            },
            suit_grid: GridSpec {
                box_size: HERO_SIZE,
                spacing: 40.0,
                top: 90.0,
                row_pitch: 100.0,
            },
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "heroes_unleashed_tuning";

    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("hero_size", self.hero_size),
            ("hero_speed", self.hero_speed),
            ("villain_size", self.villain_size),
            ("projectile_size", self.projectile_size),
            ("projectile_speed", self.projectile_speed),
            ("hero_grid.box_size", self.hero_grid.box_size),
            ("suit_grid.box_size", self.suit_grid.box_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        if self.villain_health == 0 {
            return Err(TuningError::Invalid {
                field: "villain_health",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.fire_cooldown_ms.is_finite() && self.fire_cooldown_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "fire_cooldown_ms",
                reason: format!("must be non-negative, got {}", self.fire_cooldown_ms),
            });
        }
        for (field, value) in [
            ("hero_grid.spacing", self.hero_grid.spacing),
            ("suit_grid.spacing", self.suit_grid.spacing),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Load override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
