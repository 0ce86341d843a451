// Player states

/// Represents the current behavioral mode of the player.
///
/// Exactly one state is active at a time; transitions between them are
/// validated against the static state table unless forced by an internal
/// rule (resource depletion, animation completion, death chaining).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Standing still, regenerating stamina and mana
    Idle,
    /// Generic walking without a committed direction
    Walking,
    MovingUp,
    MovingDown,
    MovingLeft,
    MovingRight,
    MovingUpLeft,
    MovingUpRight,
    MovingDownLeft,
    MovingDownRight,
    /// Mid-attack; uninterruptible by new input
    Attacking,
    /// Holding the shield up, draining stamina
    Shield,
    /// Death animation is playing
    Dead,
    /// Respawn animation is playing
    Respawn,
    /// Reserved for collision response; currently an inert placeholder
    Collision,
}

impl Default for State {
    fn default() -> Self {
        Self::Idle
    }
}

impl State {
    /// Number of states, for table sizing
    pub const COUNT: usize = 15;

    /// Every state, in table order
    pub const ALL: [State; State::COUNT] = [
        State::Idle,
        State::Walking,
        State::MovingUp,
        State::MovingDown,
        State::MovingLeft,
        State::MovingRight,
        State::MovingUpLeft,
        State::MovingUpRight,
        State::MovingDownLeft,
        State::MovingDownRight,
        State::Attacking,
        State::Shield,
        State::Dead,
        State::Respawn,
        State::Collision,
    ];

    /// Slot in the state table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is walking or any of the eight directional moves
    pub fn is_moving(self) -> bool {
        matches!(
            self,
            Self::Walking
                | Self::MovingUp
                | Self::MovingDown
                | Self::MovingLeft
                | Self::MovingRight
                | Self::MovingUpLeft
                | Self::MovingUpRight
                | Self::MovingDownLeft
                | Self::MovingDownRight
        )
    }

    /// Cardinal facing for single-axis movement states
    pub fn cardinal_direction(self) -> Option<Direction> {
        match self {
            Self::MovingUp => Some(Direction::Up),
            Self::MovingDown => Some(Direction::Down),
            Self::MovingLeft => Some(Direction::Left),
            Self::MovingRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Last cardinal facing, used to key directional attack sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Down
    }
}
