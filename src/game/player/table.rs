// Static state table
//
// Built once for the process and shared read-only by every player entity.
// Per-entity mutable data (resources, position, animation cursor, current
// and previous state) lives on the entity itself.

use super::behavior::{
    AttackingBehavior, DeadBehavior, IdleBehavior, MovingBehavior, NoopBehavior, RespawnBehavior,
    ShieldBehavior, StateBehavior,
};
use super::state::State;

/// Static configuration for one state: display name, behavior hooks, and
/// the destinations an event-driven transition may reach.
pub struct StateConfig {
    pub state: State,
    pub name: &'static str,
    pub behavior: &'static dyn StateBehavior,
    pub allowed: &'static [State],
}

impl StateConfig {
    /// Whether an event-driven transition to `to` is permitted
    pub fn allows(&self, to: State) -> bool {
        self.allowed.contains(&to)
    }
}

const IDLE_DESTINATIONS: &[State] = &[
    State::Walking,
    State::Attacking,
    State::Shield,
    State::Dead,
    State::MovingUp,
    State::MovingDown,
    State::MovingLeft,
    State::MovingRight,
    State::MovingUpLeft,
    State::MovingUpRight,
    State::MovingDownLeft,
    State::MovingDownRight,
];

const MOVING_DESTINATIONS: &[State] = &[
    State::Idle,
    State::Attacking,
    State::Dead,
    State::MovingUp,
    State::MovingDown,
    State::MovingLeft,
    State::MovingRight,
    State::MovingUpLeft,
    State::MovingUpRight,
    State::MovingDownLeft,
    State::MovingDownRight,
];

const ATTACKING_DESTINATIONS: &[State] = &[State::Idle, State::Dead];
const SHIELD_DESTINATIONS: &[State] = &[State::Idle, State::Dead];
const DEAD_DESTINATIONS: &[State] = &[State::Respawn];
const RESPAWN_DESTINATIONS: &[State] = &[State::Idle];
const NO_DESTINATIONS: &[State] = &[];

static IDLE: IdleBehavior = IdleBehavior;
static MOVING: MovingBehavior = MovingBehavior;
static ATTACKING: AttackingBehavior = AttackingBehavior;
static SHIELD: ShieldBehavior = ShieldBehavior;
static DEAD: DeadBehavior = DeadBehavior;
static RESPAWN: RespawnBehavior = RespawnBehavior;
static NOOP: NoopBehavior = NoopBehavior;

static STATE_TABLE: [StateConfig; State::COUNT] = [
    StateConfig {
        state: State::Idle,
        name: "idle",
        behavior: &IDLE,
        allowed: IDLE_DESTINATIONS,
    },
    StateConfig {
        state: State::Walking,
        name: "walking",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingUp,
        name: "moving_up",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingDown,
        name: "moving_down",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingLeft,
        name: "moving_left",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingRight,
        name: "moving_right",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingUpLeft,
        name: "moving_up_left",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingUpRight,
        name: "moving_up_right",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingDownLeft,
        name: "moving_down_left",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::MovingDownRight,
        name: "moving_down_right",
        behavior: &MOVING,
        allowed: MOVING_DESTINATIONS,
    },
    StateConfig {
        state: State::Attacking,
        name: "attacking",
        behavior: &ATTACKING,
        allowed: ATTACKING_DESTINATIONS,
    },
    StateConfig {
        state: State::Shield,
        name: "shield",
        behavior: &SHIELD,
        allowed: SHIELD_DESTINATIONS,
    },
    StateConfig {
        state: State::Dead,
        name: "dead",
        behavior: &DEAD,
        allowed: DEAD_DESTINATIONS,
    },
    StateConfig {
        state: State::Respawn,
        name: "respawn",
        behavior: &RESPAWN,
        allowed: RESPAWN_DESTINATIONS,
    },
    StateConfig {
        state: State::Collision,
        name: "collision",
        behavior: &NOOP,
        allowed: NO_DESTINATIONS,
    },
];

/// Look up the static configuration for a state
pub fn config_for(state: State) -> &'static StateConfig {
    &STATE_TABLE[state.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_matches_its_state() {
        for state in State::ALL {
            assert_eq!(config_for(state).state, state);
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in State::ALL.iter().enumerate() {
            for b in State::ALL.iter().skip(i + 1) {
                assert_ne!(config_for(*a).name, config_for(*b).name);
            }
        }
    }

    #[test]
    fn test_idle_destinations() {
        let config = config_for(State::Idle);
        assert!(config.allows(State::Walking));
        assert!(config.allows(State::Shield));
        assert!(config.allows(State::MovingDownRight));
        assert!(!config.allows(State::Respawn));
        assert!(!config.allows(State::Collision));
    }

    #[test]
    fn test_moving_states_can_resteer_and_settle() {
        for state in State::ALL.into_iter().filter(|s| s.is_moving()) {
            let config = config_for(state);
            assert!(config.allows(State::Idle), "{} -> idle", config.name);
            assert!(config.allows(State::MovingUpLeft));
            assert!(config.allows(State::Attacking));
            assert!(config.allows(State::Dead));
            assert!(!config.allows(State::Shield));
        }
    }

    #[test]
    fn test_terminal_states_are_narrow() {
        assert_eq!(config_for(State::Dead).allowed, &[State::Respawn]);
        assert_eq!(config_for(State::Respawn).allowed, &[State::Idle]);
        assert!(config_for(State::Collision).allowed.is_empty());
    }

    #[test]
    fn test_attack_and_shield_settle_or_die() {
        for state in [State::Attacking, State::Shield] {
            let config = config_for(state);
            assert!(config.allows(State::Idle));
            assert!(config.allows(State::Dead));
            assert_eq!(config.allowed.len(), 2);
        }
    }
}
