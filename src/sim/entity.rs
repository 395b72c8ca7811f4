//! Entity records: hero, villain, projectiles
//!
//! Every entity is a `Rect` (top-left position + size, screen pixels) with
//! behaviour attached by composition rather than a shared base type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square rect of the given edge length
    pub fn square(pos: Vec2, edge: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(edge),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Render-side tag for snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Hero,
    Villain,
    Projectile,
}

/// What a render hook needs to draw one entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot<'a> {
    pub kind: EntityKind,
    pub rect: Rect,
    pub sprite_key: &'a str,
    /// Villain only: remaining health in [0, 1]; `None` once defeated
    pub health_ratio: Option<f32>,
}

/// The controllable hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub rect: Rect,
    /// Current visual; replaced when a suit is chosen
    pub sprite_key: String,
}

impl Hero {
    /// Spawn at the bottom anchor: left edge on the horizontal centre
    pub fn at_anchor(viewport: Vec2, size: f32, sprite_key: impl Into<String>) -> Self {
        let pos = Vec2::new(viewport.x / 2.0, viewport.y - size - HERO_BOTTOM_MARGIN);
        Self {
            rect: Rect::square(pos, size),
            sprite_key: sprite_key.into(),
        }
    }

    pub fn snapshot(&self) -> EntitySnapshot<'_> {
        EntitySnapshot {
            kind: EntityKind::Hero,
            rect: self.rect,
            sprite_key: &self.sprite_key,
            health_ratio: None,
        }
    }
}

/// Health bookkeeping; health only ever goes down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    pub health: u32,
    pub max_health: u32,
}

impl HealthState {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.health > 0
    }

    /// Remove one point, flooring at zero. No-op once at zero.
    pub fn take_damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn ratio(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

/// The single villain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villain {
    pub rect: Rect,
    pub health: HealthState,
}

impl Villain {
    pub const SPRITE_KEY: &'static str = "venom.png";

    pub fn new(pos: Vec2, size: f32, max_health: u32) -> Self {
        Self {
            rect: Rect::square(pos, size),
            health: HealthState::new(max_health),
        }
    }

    /// Standard placement: horizontal centre, upper quarter
    pub fn for_viewport(viewport: Vec2, size: f32, max_health: u32) -> Self {
        Self::new(Vec2::new(viewport.x / 2.0, viewport.y / 4.0), size, max_health)
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.health.alive()
    }

    pub fn take_damage(&mut self) {
        self.health.take_damage();
    }

    pub fn snapshot(&self) -> EntitySnapshot<'_> {
        EntitySnapshot {
            kind: EntityKind::Villain,
            rect: self.rect,
            sprite_key: Self::SPRITE_KEY,
            health_ratio: self.alive().then(|| self.health.ratio()),
        }
    }
}

/// Straight-line motion in a fixed direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileMotion {
    /// Radians, screen space (0 = right, π/2 = down)
    pub direction: f32,
}

impl ProjectileMotion {
    /// Per-frame displacement at the given speed
    #[inline]
    pub fn velocity(&self, speed: f32) -> Vec2 {
        Vec2::new(self.direction.cos(), self.direction.sin()) * speed
    }
}

/// A web in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub motion: ProjectileMotion,
}

impl Projectile {
    pub const SPRITE_KEY: &'static str = "web.png";

    /// Spawn centred on `origin`
    pub fn centered_on(origin: Vec2, size: f32, direction: f32) -> Self {
        Self {
            rect: Rect::square(origin - Vec2::splat(size / 2.0), size),
            motion: ProjectileMotion { direction },
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.rect.pos += self.motion.velocity(speed);
    }

    /// Top-left corner inside `[0, w] x [0, h]`
    pub fn in_bounds(&self, viewport: Vec2) -> bool {
        let p = self.rect.pos;
        p.x >= 0.0 && p.x <= viewport.x && p.y >= 0.0 && p.y <= viewport.y
    }

    pub fn snapshot(&self) -> EntitySnapshot<'_> {
        EntitySnapshot {
            kind: EntityKind::Projectile,
            rect: self.rect,
            sprite_key: Self::SPRITE_KEY,
            health_ratio: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_anchor() {
        let hero = Hero::at_anchor(Vec2::new(800.0, 600.0), 50.0, "batman.png");
        assert_eq!(hero.rect.pos, Vec2::new(400.0, 540.0));
        assert_eq!(hero.rect.size, Vec2::splat(50.0));
        assert_eq!(hero.sprite_key, "batman.png");
    }

    #[test]
    fn test_villain_placement() {
        let villain = Villain::for_viewport(Vec2::new(800.0, 600.0), 50.0, 5);
        assert_eq!(villain.rect.pos, Vec2::new(400.0, 150.0));
        assert!(villain.alive());
        assert_eq!(villain.health.health, 5);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut health = HealthState::new(2);
        health.take_damage();
        assert_eq!(health.health, 1);
        assert!(health.alive());
        health.take_damage();
        assert_eq!(health.health, 0);
        assert!(!health.alive());
        health.take_damage();
        assert_eq!(health.health, 0);
        assert!(!health.alive());
    }

    #[test]
    fn test_villain_snapshot_hides_bar_when_dead() {
        let mut villain = Villain::new(Vec2::ZERO, 50.0, 4);
        villain.take_damage();
        assert_eq!(villain.snapshot().health_ratio, Some(0.75));
        for _ in 0..3 {
            villain.take_damage();
        }
        assert_eq!(villain.snapshot().health_ratio, None);
    }

    #[test]
    fn test_projectile_centered_spawn() {
        let p = Projectile::centered_on(Vec2::new(425.0, 565.0), 20.0, 0.0);
        assert_eq!(p.rect.pos, Vec2::new(415.0, 555.0));
        assert_eq!(p.rect.center(), Vec2::new(425.0, 565.0));
    }

    #[test]
    fn test_projectile_advance_rightward() {
        let mut p = Projectile::centered_on(Vec2::new(100.0, 100.0), 20.0, 0.0);
        p.advance(10.0);
        assert!((p.rect.x() - 100.0).abs() < 1e-4);
        assert!((p.rect.y() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_projectile_bounds_inclusive() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut p = Projectile::centered_on(Vec2::new(10.0, 10.0), 20.0, 0.0);
        p.rect.pos = Vec2::new(800.0, 600.0);
        assert!(p.in_bounds(viewport));
        p.rect.pos.x = 800.5;
        assert!(!p.in_bounds(viewport));
        p.rect.pos = Vec2::new(0.0, -0.1);
        assert!(!p.in_bounds(viewport));
    }
}
