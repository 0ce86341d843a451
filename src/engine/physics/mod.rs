// Collision geometry using parry2d

mod bounds;
mod collider;

pub use bounds::WorldBounds;
pub use collider::CircleCollider;
