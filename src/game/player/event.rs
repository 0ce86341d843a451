// Gameplay events offered to the state machine

use super::state::State;

/// A stimulus offered to the current state's event handler.
///
/// Events the current state does not recognize are silently ignored; one
/// dispatch handles exactly one event and produces at most one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// No input this frame; some states treat this as "settle down"
    None,
    /// Start moving without a committed direction
    Move,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveUpLeft,
    MoveUpRight,
    MoveDownLeft,
    MoveDownRight,
    Attack,
    Defend,
    Shield,
    Die,
    Respawn,
    CollisionStart,
    CollisionEnd,
}

impl Event {
    /// Number of events, for exhaustive iteration
    pub const COUNT: usize = 17;

    /// Every event, in declaration order
    pub const ALL: [Event; Event::COUNT] = [
        Event::None,
        Event::Move,
        Event::MoveUp,
        Event::MoveDown,
        Event::MoveLeft,
        Event::MoveRight,
        Event::MoveUpLeft,
        Event::MoveUpRight,
        Event::MoveDownLeft,
        Event::MoveDownRight,
        Event::Attack,
        Event::Defend,
        Event::Shield,
        Event::Die,
        Event::Respawn,
        Event::CollisionStart,
        Event::CollisionEnd,
    ];

    /// Movement state a directional move event steers into
    pub fn target_moving_state(self) -> Option<State> {
        match self {
            Self::MoveUp => Some(State::MovingUp),
            Self::MoveDown => Some(State::MovingDown),
            Self::MoveLeft => Some(State::MovingLeft),
            Self::MoveRight => Some(State::MovingRight),
            Self::MoveUpLeft => Some(State::MovingUpLeft),
            Self::MoveUpRight => Some(State::MovingUpRight),
            Self::MoveDownLeft => Some(State::MovingDownLeft),
            Self::MoveDownRight => Some(State::MovingDownRight),
            _ => None,
        }
    }

    /// Check if this is one of the eight directional move events
    pub fn is_directional_move(self) -> bool {
        self.target_moving_state().is_some()
    }
}
