//! Hit testing and overlap checks
//!
//! Clicks are inclusive on every edge; entity overlap is strict on every edge.

use glam::Vec2;

use super::entity::Rect;

/// Point-in-rect, inclusive on all four edges
#[inline]
pub fn contains_point(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x()
        && point.x <= rect.x() + rect.width()
        && point.y >= rect.y()
        && point.y <= rect.y() + rect.height()
}

/// AABB overlap, strict on all four sides (touching edges do not collide)
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x() < b.x() + b.width()
        && a.x() + a.width() > b.x()
        && a.y() < b.y() + b.height()
        && a.y() + a.height() > b.y()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges() {
        let rect = Rect::new(300.0, 130.0, 200.0, 50.0);

        assert!(contains_point(&rect, Vec2::new(300.0, 130.0)));
        assert!(contains_point(&rect, Vec2::new(500.0, 180.0)));
        assert!(contains_point(&rect, Vec2::new(400.0, 155.0)));

        assert!(!contains_point(&rect, Vec2::new(299.9, 150.0)));
        assert!(!contains_point(&rect, Vec2::new(400.0, 180.1)));
    }

    #[test]
    fn test_aabb_overlap() {
        let villain = Rect::new(400.0, 150.0, 50.0, 50.0);

        // Inside
        assert!(aabb_overlap(&Rect::new(410.0, 160.0, 20.0, 20.0), &villain));
        // Partial from below
        assert!(aabb_overlap(&Rect::new(390.0, 195.0, 20.0, 20.0), &villain));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let villain = Rect::new(400.0, 150.0, 50.0, 50.0);

        // Right edge of web meets left edge of villain
        assert!(!aabb_overlap(&Rect::new(380.0, 160.0, 20.0, 20.0), &villain));
        // Top edge of web meets bottom edge of villain
        assert!(!aabb_overlap(&Rect::new(410.0, 200.0, 20.0, 20.0), &villain));
        // Far away
        assert!(!aabb_overlap(&Rect::new(0.0, 0.0, 20.0, 20.0), &villain));
    }
}
