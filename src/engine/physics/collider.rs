// Circle collider kept in sync with an entity's position

use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::math::{Isometry, Real};
use parry2d::query;
use parry2d::shape::Ball;

/// Circle collider for a moving entity.
///
/// The owning entity re-centers the collider after every movement tick; the
/// derived AABB is what broad-phase boundary checks use.
#[derive(Debug, Clone)]
pub struct CircleCollider {
    shape: Ball,
    center: Vec2,
}

impl CircleCollider {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            shape: Ball::new(radius),
            center,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.shape.radius
    }

    /// Re-center on the owning entity's position
    pub fn sync(&mut self, position: Vec2) {
        self.center = position;
    }

    /// Axis-aligned bounding box at the current center
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(&self.isometry())
    }

    /// Overlap test against another circle collider
    pub fn intersects(&self, other: &CircleCollider) -> bool {
        query::intersection_test(
            &self.isometry(),
            &self.shape,
            &other.isometry(),
            &other.shape,
        )
        .unwrap_or(false)
    }

    fn isometry(&self) -> Isometry<Real> {
        Isometry::translation(self.center.x, self.center.y)
    }
}
