// Engine modules: animation playback, draw commands, collision geometry

pub mod animation;
pub mod physics;
pub mod render;
