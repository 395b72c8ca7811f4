//! Per-frame simulation step
//!
//! Frame-locked: every call moves things by a fixed per-frame amount, so
//! game speed follows the display refresh rate.

use super::collision::aabb_overlap;
use super::entity::Projectile;
use super::state::{GameState, SessionPhase};
use crate::axis;
use crate::tuning::Tuning;

/// Held keys for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire (Space)
    pub fire: bool,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub spawned: bool,
    /// Projectiles that hit the villain this frame
    pub hits: u32,
    /// Projectiles removed for leaving the viewport
    pub pruned: usize,
    /// The villain's health reached zero this frame
    pub villain_defeated: bool,
}

/// Shot angle from held arrows; no arrows gives 0 (rightward)
pub fn fire_direction(input: &TickInput) -> f32 {
    let vertical = axis(input.up, input.down);
    let horizontal = axis(input.left, input.right);
    vertical.atan2(horizontal)
}

/// Advance the session by one frame. No-op outside Playing.
pub fn step(state: &mut GameState, input: &TickInput, now: f64, tuning: &Tuning) -> StepReport {
    let mut report = StepReport::default();

    if state.phase != SessionPhase::Playing {
        return report;
    }
    let Some(hero) = state.hero.as_mut() else {
        return report;
    };

    state.frame_count += 1;

    // Movement: each axis independently, diagonals not normalized
    hero.rect.pos.x += axis(input.left, input.right) * tuning.hero_speed;
    hero.rect.pos.y += axis(input.up, input.down) * tuning.hero_speed;

    // Firing
    let cooled_down = state
        .last_shot_time
        .is_none_or(|last| now - last > tuning.fire_cooldown_ms);
    if input.fire && cooled_down {
        let direction = fire_direction(input);
        state.projectiles.push(Projectile::centered_on(
            hero.rect.center(),
            tuning.projectile_size,
            direction,
        ));
        state.last_shot_time = Some(now);
        report.spawned = true;
        log::debug!("Web fired at {:.3} rad", direction);
    }

    // Advance
    for projectile in &mut state.projectiles {
        projectile.advance(tuning.projectile_speed);
    }

    // Collision before pruning so a same-frame hit on the way out still counts
    let villain = &mut state.villain;
    state.projectiles.retain(|projectile| {
        if villain.alive() && aabb_overlap(&projectile.rect, &villain.rect) {
            villain.take_damage();
            report.hits += 1;
            if !villain.alive() {
                report.villain_defeated = true;
            }
            false
        } else {
            true
        }
    });
    if report.hits > 0 {
        log::debug!(
            "Villain hit {} time(s), health {}/{}",
            report.hits,
            state.villain.health.health,
            state.villain.health.max_health
        );
    }
    if report.villain_defeated {
        log::info!("Villain defeated after {} frames", state.frame_count);
    }

    // Prune off-screen
    let viewport = state.viewport;
    let before = state.projectiles.len();
    state.projectiles.retain(|p| p.in_bounds(viewport));
    report.pruned = before - state.projectiles.len();

    report
}
