// Screen-space world bounds

use glam::Vec2;

/// Playable area the entity may not leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the playable area, used as the default spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a position so a sprite of half-size `radius` stays fully inside
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        position.clamp(
            Vec2::splat(radius),
            Vec2::new(self.width - radius, self.height - radius),
        )
    }

    /// Whether the area can contain a sprite of half-size `radius` at all
    pub fn fits(&self, radius: f32) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && radius.is_finite()
            && radius >= 0.0
            && self.width > radius * 2.0
            && self.height > radius * 2.0
    }
}
