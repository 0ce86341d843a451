// Deferred draw commands
//
// The simulation never talks to a graphics API. State updates push commands
// into a queue and the host's render pass drains it once per frame.

use glam::Vec2;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A single deferred drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle in world space
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Per-frame list of deferred draw operations
#[derive(Debug, Default)]
pub struct RenderQueue {
    commands: Vec<DrawCommand>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Queue a command for the next render pass
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// View the queued commands without consuming them
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the queue, handing each command to the render pass
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }

    /// Discard everything queued this frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
