// Emberwake player simulation core
//
// Event-driven state machine for the player entity, plus the animation,
// resource, and collision-geometry pieces it drives. Rendering, asset
// loading, window management, and raw-input mapping belong to the host game;
// this crate consumes abstract gameplay events and emits draw commands.

pub mod engine;
pub mod game;

// Re-export the types collaborators touch most
pub use engine::animation::{AnimationSequence, Animator, FrameRegion};
pub use engine::physics::{CircleCollider, WorldBounds};
pub use engine::render::{Color, DrawCommand, RenderQueue};
pub use game::player::{
    Direction, Event, Player, PlayerError, PlayerId, PlayerManager, PlayerStats, ResourcePool,
    State,
};
