// Sprite-sheet frame tables
//
// Row offsets index into the player sprite sheet: regular animations use
// 64x64 frames, attack swings use 192x192 frames. Sequences are static and
// shared; the animator copies one on state entry.

use crate::engine::animation::{AnimationSequence, FrameRegion};

use super::state::{Direction, State};

/// Side length of a regular sprite-sheet frame, in pixels
const FRAME_SIZE: f32 = 64.0;
/// Side length of an attack frame, in pixels
const ATTACK_FRAME_SIZE: f32 = 192.0;

/// Build one horizontal sheet row of `N` square frames starting at `y`
const fn sheet_row<const N: usize>(y: f32, size: f32) -> [FrameRegion; N] {
    let mut frames = [FrameRegion::new(0.0, 0.0, 0.0, 0.0); N];
    let mut i = 0;
    while i < N {
        frames[i] = FrameRegion::new(size * i as f32, y, size, size);
        i += 1;
    }
    frames
}

static IDLE_ROW_1: [FrameRegion; 8] = sheet_row(320.0, FRAME_SIZE);
static IDLE_ROW_2: [FrameRegion; 8] = sheet_row(384.0, FRAME_SIZE);
static IDLE_ROW_3: [FrameRegion; 8] = sheet_row(448.0, FRAME_SIZE);
static IDLE_ROW_4: [FrameRegion; 13] = sheet_row(1024.0, FRAME_SIZE);
static IDLE_ROW_5: [FrameRegion; 13] = sheet_row(1088.0, FRAME_SIZE);
static IDLE_ROW_6: [FrameRegion; 13] = sheet_row(1152.0, FRAME_SIZE);
static IDLE_ROW_7: [FrameRegion; 13] = sheet_row(1216.0, FRAME_SIZE);

static WALK_UP_ROW: [FrameRegion; 9] = sheet_row(512.0, FRAME_SIZE);
static WALK_LEFT_ROW: [FrameRegion; 9] = sheet_row(576.0, FRAME_SIZE);
static WALK_DOWN_ROW: [FrameRegion; 9] = sheet_row(640.0, FRAME_SIZE);
static WALK_RIGHT_ROW: [FrameRegion; 9] = sheet_row(704.0, FRAME_SIZE);

static ATTACK_UP_ROW: [FrameRegion; 6] = sheet_row(2994.0, ATTACK_FRAME_SIZE);
static ATTACK_LEFT_ROW: [FrameRegion; 6] = sheet_row(3136.0, ATTACK_FRAME_SIZE);
static ATTACK_DOWN_ROW: [FrameRegion; 6] = sheet_row(3328.0, ATTACK_FRAME_SIZE);
static ATTACK_RIGHT_ROW: [FrameRegion; 6] = sheet_row(3520.0, ATTACK_FRAME_SIZE);

static DEATH_ROW: [FrameRegion; 6] = sheet_row(1280.0, FRAME_SIZE);
static RESPAWN_ROW: [FrameRegion; 8] = sheet_row(384.0, FRAME_SIZE);
static SHIELD_ROW: [FrameRegion; 8] = sheet_row(384.0, FRAME_SIZE);

/// Idle loops; one is rolled at random on every idle entry
pub static IDLE_SEQUENCES: [AnimationSequence; 7] = [
    AnimationSequence::looping(&IDLE_ROW_1, 0.2),
    AnimationSequence::looping(&IDLE_ROW_2, 0.2),
    AnimationSequence::looping(&IDLE_ROW_3, 0.2),
    AnimationSequence::looping(&IDLE_ROW_4, 0.2),
    AnimationSequence::looping(&IDLE_ROW_5, 0.2),
    AnimationSequence::looping(&IDLE_ROW_6, 0.2),
    AnimationSequence::looping(&IDLE_ROW_7, 0.2),
];

pub static WALK_UP: AnimationSequence = AnimationSequence::one_shot(&WALK_UP_ROW, 0.1);
pub static WALK_DOWN: AnimationSequence = AnimationSequence::one_shot(&WALK_DOWN_ROW, 0.1);
pub static WALK_LEFT: AnimationSequence = AnimationSequence::one_shot(&WALK_LEFT_ROW, 0.1);
pub static WALK_RIGHT: AnimationSequence = AnimationSequence::one_shot(&WALK_RIGHT_ROW, 0.1);

pub static ATTACK_UP: AnimationSequence = AnimationSequence::one_shot(&ATTACK_UP_ROW, 0.1);
pub static ATTACK_DOWN: AnimationSequence = AnimationSequence::one_shot(&ATTACK_DOWN_ROW, 0.1);
pub static ATTACK_LEFT: AnimationSequence = AnimationSequence::one_shot(&ATTACK_LEFT_ROW, 0.1);
pub static ATTACK_RIGHT: AnimationSequence = AnimationSequence::one_shot(&ATTACK_RIGHT_ROW, 0.1);

pub static DEATH: AnimationSequence = AnimationSequence::one_shot(&DEATH_ROW, 0.2);
pub static RESPAWN: AnimationSequence = AnimationSequence::one_shot(&RESPAWN_ROW, 0.1);
pub static SHIELD: AnimationSequence = AnimationSequence::looping(&SHIELD_ROW, 0.1);

/// Walk sequence for a movement state; diagonals reuse the up- and
/// down-facing rows
pub fn walk_sequence(state: State) -> AnimationSequence {
    match state {
        State::MovingDown | State::MovingDownLeft | State::MovingDownRight => WALK_DOWN,
        State::MovingLeft => WALK_LEFT,
        State::MovingRight => WALK_RIGHT,
        // MovingUp, the up diagonals, and plain Walking face up
        _ => WALK_UP,
    }
}

/// Attack sequence keyed by the last cardinal facing
pub fn attack_sequence(direction: Direction) -> AnimationSequence {
    match direction {
        Direction::Up => ATTACK_UP,
        Direction::Down => ATTACK_DOWN,
        Direction::Left => ATTACK_LEFT,
        Direction::Right => ATTACK_RIGHT,
    }
}

/// Uniform roll among the idle loops
pub fn random_idle_sequence(rng: &mut fastrand::Rng) -> AnimationSequence {
    IDLE_SEQUENCES[rng.usize(0..IDLE_SEQUENCES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_row_layout() {
        assert_eq!(WALK_UP_ROW[0], FrameRegion::new(0.0, 512.0, 64.0, 64.0));
        assert_eq!(WALK_UP_ROW[8], FrameRegion::new(512.0, 512.0, 64.0, 64.0));
        assert_eq!(
            ATTACK_DOWN_ROW[1],
            FrameRegion::new(192.0, 3328.0, 192.0, 192.0)
        );
    }

    #[test]
    fn test_idle_pool_has_seven_loops() {
        assert_eq!(IDLE_SEQUENCES.len(), 7);
        for sequence in &IDLE_SEQUENCES {
            assert!(!sequence.is_empty());
            assert!(sequence.looping);
        }
    }

    #[test]
    fn test_walk_sequences_keyed_by_state() {
        assert_eq!(walk_sequence(State::MovingUp), WALK_UP);
        assert_eq!(walk_sequence(State::MovingDown), WALK_DOWN);
        assert_eq!(walk_sequence(State::MovingLeft), WALK_LEFT);
        assert_eq!(walk_sequence(State::MovingRight), WALK_RIGHT);
    }

    #[test]
    fn test_diagonals_reuse_vertical_rows() {
        assert_eq!(walk_sequence(State::MovingUpLeft), WALK_UP);
        assert_eq!(walk_sequence(State::MovingUpRight), WALK_UP);
        assert_eq!(walk_sequence(State::MovingDownLeft), WALK_DOWN);
        assert_eq!(walk_sequence(State::MovingDownRight), WALK_DOWN);
    }

    #[test]
    fn test_attack_sequences_keyed_by_facing() {
        assert_eq!(attack_sequence(Direction::Up), ATTACK_UP);
        assert_eq!(attack_sequence(Direction::Down), ATTACK_DOWN);
        assert_eq!(attack_sequence(Direction::Left), ATTACK_LEFT);
        assert_eq!(attack_sequence(Direction::Right), ATTACK_RIGHT);
    }

    #[test]
    fn test_one_shot_action_sequences() {
        assert!(!WALK_UP.looping);
        assert!(!ATTACK_DOWN.looping);
        assert!(!DEATH.looping);
        assert!(!RESPAWN.looping);
        assert!(SHIELD.looping);
    }

    #[test]
    fn test_random_idle_stays_in_pool() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..50 {
            let sequence = random_idle_sequence(&mut rng);
            assert!(IDLE_SEQUENCES.contains(&sequence));
        }
    }
}
