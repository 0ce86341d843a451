// Player entity and management

use glam::Vec2;
use log::{debug, info, warn};

use crate::engine::animation::{AnimationSequence, Animator};
use crate::engine::physics::{CircleCollider, WorldBounds};
use crate::engine::render::{Color, RenderQueue};

use super::event::Event;
use super::frames;
use super::resources::ResourcePool;
use super::state::{Direction, State};
use super::stats::{PlayerStats, BASE_STATS};
use super::table;

/// Unique identifier for a spawned player
pub type PlayerId = u32;

/// Hooks that trigger further transitions are cut off past this depth
const MAX_TRANSITION_DEPTH: u8 = 8;

/// Errors returned when spawning a player
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("world bounds {width}x{height} cannot contain clamp radius {radius}")]
    BoundsTooSmall {
        width: f32,
        height: f32,
        radius: f32,
    },
}

/// A player-controlled entity driven by the state machine.
///
/// All mutable simulation data lives here; the state table itself is a
/// process-wide constant shared by every instance. Within one tick, dispatch
/// any pending events first and call [`Player::tick`] after, since the
/// update assumes entry hooks have already installed the current animation.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    stats: PlayerStats,
    bounds: WorldBounds,

    position: Vec2,
    velocity: Vec2,
    spawn_point: Vec2,
    collider: CircleCollider,

    health: ResourcePool,
    stamina: ResourcePool,
    mana: ResourcePool,
    lives: u32,

    current_state: State,
    previous_state: State,
    last_direction: Direction,
    animator: Animator,

    shield_color: Color,
    shield_radius: f32,
    shield_active: bool,

    rng: fastrand::Rng,
    transition_depth: u8,
}

impl Player {
    /// Create a player at the center of `bounds`
    pub fn new(id: PlayerId, name: &str, bounds: WorldBounds) -> Result<Self, PlayerError> {
        Self::with_seed(id, name, bounds, fastrand::u64(..))
    }

    /// Deterministic construction for tests and replays
    pub fn with_seed(
        id: PlayerId,
        name: &str,
        bounds: WorldBounds,
        seed: u64,
    ) -> Result<Self, PlayerError> {
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }

        let stats = BASE_STATS;
        if !bounds.fits(stats.clamp_radius) {
            return Err(PlayerError::BoundsTooSmall {
                width: bounds.width,
                height: bounds.height,
                radius: stats.clamp_radius,
            });
        }

        let spawn_point = bounds.center();
        let mut player = Self {
            id,
            name: name.to_string(),
            bounds,
            position: spawn_point,
            velocity: Vec2::ZERO,
            spawn_point,
            collider: CircleCollider::new(spawn_point, stats.collider_radius),
            health: ResourcePool::full(stats.max_health),
            stamina: ResourcePool::full(stats.max_stamina),
            mana: ResourcePool::full(stats.max_mana),
            lives: stats.starting_lives,
            current_state: State::Idle,
            previous_state: State::Idle,
            last_direction: Direction::Down,
            animator: Animator::new(frames::IDLE_SEQUENCES[0]),
            shield_color: Color::rgba(0, 0, 0, 0),
            shield_radius: 0.0,
            shield_active: false,
            rng: fastrand::Rng::with_seed(seed),
            transition_depth: 0,
            stats,
        };

        // Run the starting state's entry hook so the first tick already sees
        // an installed animation
        table::config_for(player.current_state)
            .behavior
            .on_enter(&mut player);

        Ok(player)
    }

    // --- state machine ---

    /// Offer one event to the current state's handler.
    ///
    /// Unrecognized (state, event) pairs are ignored; at most one transition
    /// results per call. Simultaneous events require one call each.
    pub fn dispatch(&mut self, event: Event) {
        table::config_for(self.current_state)
            .behavior
            .on_event(self, event);
    }

    /// Advance the simulation by one tick of the current state
    pub fn tick(&mut self, dt: f32, queue: &mut RenderQueue) {
        table::config_for(self.current_state)
            .behavior
            .on_update(self, dt, queue);
    }

    /// Event-driven transition, validated against the allowed-destination
    /// set of the current state. Returns false and leaves the state
    /// untouched when the destination is not permitted.
    pub fn try_transition(&mut self, to: State) -> bool {
        if !table::config_for(self.current_state).allows(to) {
            warn!(
                "{}: transition {} -> {} rejected",
                self.name,
                self.state_name(),
                table::config_for(to).name
            );
            return false;
        }
        self.apply_transition(to)
    }

    /// Internally-forced transition (resource depletion, animation
    /// completion, death chaining); bypasses the allowed-destination set
    pub fn force_transition(&mut self, to: State) -> bool {
        self.apply_transition(to)
    }

    /// Shared exit/entry core for both transition policies
    fn apply_transition(&mut self, to: State) -> bool {
        if self.transition_depth >= MAX_TRANSITION_DEPTH {
            warn!(
                "{}: transition chain cut off at {} -> {}",
                self.name,
                self.state_name(),
                table::config_for(to).name
            );
            return false;
        }
        self.transition_depth += 1;

        let from = self.current_state;
        table::config_for(from).behavior.on_exit(self);

        self.previous_state = from;
        self.current_state = to;
        debug!(
            "{}: {} -> {}",
            self.name,
            table::config_for(from).name,
            table::config_for(to).name
        );

        table::config_for(to).behavior.on_enter(self);

        self.transition_depth -= 1;
        true
    }

    /// Record the current state as its own predecessor without transitioning;
    /// idle does this when no input arrives
    pub(crate) fn note_no_transition(&mut self) {
        self.previous_state = self.current_state;
    }

    // --- movement ---

    /// Move along the current state's direction, clamp to the world bounds,
    /// and re-center the collider. Cardinal moves update the facing.
    pub(crate) fn integrate_movement(&mut self) {
        let speed = self.stats.move_speed;
        let half = speed / 2.0;

        // Diagonals apply half speed per axis, deliberately unnormalized
        let delta = match self.current_state {
            State::MovingUpRight => Vec2::new(half, -half),
            State::MovingUpLeft => Vec2::new(-half, -half),
            State::MovingDownRight => Vec2::new(half, half),
            State::MovingDownLeft => Vec2::new(-half, half),
            State::MovingUp => Vec2::new(0.0, -speed),
            State::MovingDown => Vec2::new(0.0, speed),
            State::MovingLeft => Vec2::new(-speed, 0.0),
            State::MovingRight => Vec2::new(speed, 0.0),
            // Plain walking drifts upward
            _ => Vec2::new(0.0, -speed),
        };

        if let Some(direction) = self.current_state.cardinal_direction() {
            self.last_direction = direction;
        }

        self.velocity = delta;
        self.position = self
            .bounds
            .clamp(self.position + delta, self.stats.clamp_radius);
        self.collider.sync(self.position);
    }

    // --- resources & combat ---

    /// Apply damage; the health pool clamps at zero. Death itself is decided
    /// by the movement update or an explicit die event.
    pub fn take_damage(&mut self, amount: f32) {
        self.health.deplete(amount);
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Back to the spawn point with a fresh set of lives
    pub(crate) fn game_over_reset(&mut self) {
        self.position = self.spawn_point;
        self.collider.sync(self.position);
        self.lives = self.stats.starting_lives;
    }

    /// Reset position and refill every pool for a respawn
    pub(crate) fn respawn_reset(&mut self) {
        self.position = self.spawn_point;
        self.collider.sync(self.position);
        self.health.refill();
        self.stamina.refill();
        self.mana.refill();
    }

    // --- shield ---

    pub(crate) fn activate_shield(&mut self, color: Color, radius: f32) {
        self.shield_color = color;
        self.shield_radius = radius;
        self.shield_active = true;
    }

    pub(crate) fn deactivate_shield(&mut self) {
        self.shield_active = false;
    }

    // --- animation ---

    pub(crate) fn install_sequence(&mut self, sequence: AnimationSequence) {
        self.animator.install(sequence);
    }

    pub(crate) fn rng_mut(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }

    // --- accessors ---

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn state(&self) -> State {
        self.current_state
    }

    pub fn previous_state(&self) -> State {
        self.previous_state
    }

    /// Display name of the current state, as used in transition traces
    pub fn state_name(&self) -> &'static str {
        table::config_for(self.current_state).name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn_point
    }

    pub fn collider(&self) -> &CircleCollider {
        &self.collider
    }

    pub fn health(&self) -> &ResourcePool {
        &self.health
    }

    pub fn stamina(&self) -> &ResourcePool {
        &self.stamina
    }

    pub fn mana(&self) -> &ResourcePool {
        &self.mana
    }

    pub(crate) fn stamina_mut(&mut self) -> &mut ResourcePool {
        &mut self.stamina
    }

    pub(crate) fn mana_mut(&mut self) -> &mut ResourcePool {
        &mut self.mana
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub(crate) fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    pub fn shield_color(&self) -> Color {
        self.shield_color
    }

    pub fn shield_radius(&self) -> f32 {
        self.shield_radius
    }
}

/// Owns every spawned player and hands out sequential ids
#[derive(Debug)]
pub struct PlayerManager {
    players: Vec<Player>,
    next_id: PlayerId,
    bounds: WorldBounds,
}

impl PlayerManager {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            players: Vec::new(),
            next_id: 0,
            bounds,
        }
    }

    /// Spawn a new player at the center of the world bounds
    pub fn spawn(&mut self, name: &str) -> Result<PlayerId, PlayerError> {
        let id = self.next_id;
        let player = Player::new(id, name, self.bounds)?;
        self.next_id += 1;

        info!("spawned player {} ({})", player.name(), id);
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player, returning it if present
    pub fn despawn(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        let player = self.players.remove(index);
        info!("despawned player {} ({})", player.name(), id);
        Some(player)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn all_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Offer an event to one player. Returns false for unknown ids.
    pub fn dispatch(&mut self, id: PlayerId, event: Event) -> bool {
        match self.get_mut(id) {
            Some(player) => {
                player.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Tick one player. Returns false for unknown ids.
    pub fn tick(&mut self, id: PlayerId, dt: f32, queue: &mut RenderQueue) -> bool {
        match self.get_mut(id) {
            Some(player) => {
                player.tick(dt, queue);
                true
            }
            None => false,
        }
    }

    /// Tick every player once
    pub fn update_all(&mut self, dt: f32, queue: &mut RenderQueue) {
        for player in &mut self.players {
            player.tick(dt, queue);
        }
    }

    pub fn count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
