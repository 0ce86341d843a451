// Per-state behavior hooks
//
// One stateless unit struct per state tag, wired into the static state
// table. All mutable data lives on the `Player`; hooks receive it by
// exclusive borrow and run to completion within the tick that invoked them.

use crate::engine::render::{Color, DrawCommand, RenderQueue};

use super::event::Event;
use super::frames;
use super::player::Player;
use super::state::State;

/// Shield overlay tint
const SHIELD_COLOR: Color = Color::rgba(0, 255, 128, 128);

/// Behavior hooks for one state tag.
///
/// Every hook has an empty default so reserved states only override what
/// they need.
pub trait StateBehavior: Sync {
    /// Runs once when the state is entered, before any update
    fn on_enter(&self, _player: &mut Player) {}

    /// Runs once per simulation tick while the state is current
    fn on_update(&self, _player: &mut Player, _dt: f32, _queue: &mut RenderQueue) {}

    /// Runs once when the state is left
    fn on_exit(&self, _player: &mut Player) {}

    /// Reacts to a dispatched event, performing at most one transition
    fn on_event(&self, _player: &mut Player, _event: Event) {}
}

/// Inert behavior for reserved states
pub struct NoopBehavior;

impl StateBehavior for NoopBehavior {}

pub struct IdleBehavior;

impl StateBehavior for IdleBehavior {
    fn on_enter(&self, player: &mut Player) {
        // A fresh loop is rolled on every entry, including re-entry
        let sequence = frames::random_idle_sequence(player.rng_mut());
        player.install_sequence(sequence);
    }

    fn on_update(&self, player: &mut Player, dt: f32, _queue: &mut RenderQueue) {
        let rate = player.stats().regen_rate;
        player.stamina_mut().regen(rate);
        player.mana_mut().regen(rate);
        player.animator_mut().advance(dt);
    }

    fn on_event(&self, player: &mut Player, event: Event) {
        match event {
            Event::None => player.note_no_transition(),
            Event::Move => {
                player.try_transition(State::Walking);
            }
            Event::Attack => {
                player.try_transition(State::Attacking);
            }
            Event::Defend | Event::Shield => {
                player.try_transition(State::Shield);
            }
            Event::Die => {
                player.try_transition(State::Dead);
            }
            _ => {
                if let Some(target) = event.target_moving_state() {
                    player.try_transition(target);
                }
            }
        }
    }
}

/// Shared by `Walking` and all eight directional movement states
pub struct MovingBehavior;

impl StateBehavior for MovingBehavior {
    fn on_enter(&self, player: &mut Player) {
        let sequence = frames::walk_sequence(player.state());
        player.install_sequence(sequence);
    }

    fn on_update(&self, player: &mut Player, dt: f32, _queue: &mut RenderQueue) {
        let cost = player.stats().move_stamina_cost;
        if player.stamina_mut().deplete(cost) {
            // Out of breath: no movement on the depletion tick
            player.force_transition(State::Idle);
            return;
        }

        player.integrate_movement();
        player.animator_mut().advance(dt);

        if player.health().is_empty() {
            player.force_transition(State::Dead);
            return;
        }

        // Movement is a fixed-length action, not a held state
        if player.animator().is_finished() {
            player.force_transition(State::Idle);
        }
    }

    fn on_event(&self, player: &mut Player, event: Event) {
        match event {
            Event::None => {
                player.try_transition(State::Idle);
            }
            Event::Attack => {
                player.try_transition(State::Attacking);
            }
            Event::Die => {
                player.try_transition(State::Dead);
            }
            _ => {
                if let Some(target) = event.target_moving_state() {
                    player.try_transition(target);
                }
            }
        }
    }
}

pub struct AttackingBehavior;

impl StateBehavior for AttackingBehavior {
    fn on_enter(&self, player: &mut Player) {
        // The swing faces where the player last moved, not the attack input
        let sequence = frames::attack_sequence(player.last_direction());
        player.install_sequence(sequence);
    }

    fn on_update(&self, player: &mut Player, dt: f32, _queue: &mut RenderQueue) {
        let cost = player.stats().attack_mana_cost;
        if player.mana_mut().deplete(cost) {
            player.force_transition(State::Idle);
            return;
        }

        player.animator_mut().advance(dt);

        if player.animator().is_finished() {
            player.force_transition(State::Idle);
        }
    }

    fn on_event(&self, player: &mut Player, event: Event) {
        // Attack is uninterruptible by new input
        match event {
            Event::None => {
                player.try_transition(State::Idle);
            }
            Event::Die => {
                player.try_transition(State::Dead);
            }
            _ => {}
        }
    }
}

pub struct ShieldBehavior;

impl StateBehavior for ShieldBehavior {
    fn on_enter(&self, player: &mut Player) {
        let radius = player.stats().shield_radius;
        player.activate_shield(SHIELD_COLOR, radius);
        player.install_sequence(frames::SHIELD);
    }

    fn on_update(&self, player: &mut Player, dt: f32, queue: &mut RenderQueue) {
        let cost = player.stats().shield_stamina_cost;
        if player.stamina_mut().deplete(cost) {
            player.force_transition(State::Idle);
            return;
        }

        player.animator_mut().advance(dt);

        queue.push(DrawCommand::Circle {
            center: player.position(),
            radius: player.shield_radius(),
            color: player.shield_color(),
        });
    }

    fn on_exit(&self, player: &mut Player) {
        player.deactivate_shield();
    }

    fn on_event(&self, player: &mut Player, event: Event) {
        match event {
            Event::Die => {
                player.try_transition(State::Dead);
            }
            // Moving drops the shield
            _ if event.is_directional_move() => {
                player.try_transition(State::Idle);
            }
            _ => {}
        }
    }
}

pub struct DeadBehavior;

impl StateBehavior for DeadBehavior {
    fn on_enter(&self, player: &mut Player) {
        player.install_sequence(frames::DEATH);
    }

    fn on_update(&self, player: &mut Player, dt: f32, _queue: &mut RenderQueue) {
        player.animator_mut().advance(dt);
        if !player.animator().is_finished() {
            return;
        }

        player.lose_life();
        if player.lives() > 0 {
            player.force_transition(State::Respawn);
        } else {
            // Full game over: back to the spawn point with fresh lives,
            // skipping the respawn animation
            player.game_over_reset();
            player.force_transition(State::Idle);
        }
    }

    // Events cannot leave this state; only the update logic can
}

pub struct RespawnBehavior;

impl StateBehavior for RespawnBehavior {
    fn on_enter(&self, player: &mut Player) {
        player.respawn_reset();
        player.install_sequence(frames::RESPAWN);
    }

    fn on_update(&self, player: &mut Player, dt: f32, _queue: &mut RenderQueue) {
        player.animator_mut().advance(dt);
        if player.animator().is_finished() {
            player.force_transition(State::Idle);
        }
    }
}
