// Player tuning constants - one fixed profile for the player kind
//
// Resource costs and the regeneration rate are per simulation tick, not per
// second; the movement speed is the distance covered along one axis in a
// single tick.

/// Fixed tuning values for the player entity
#[derive(Debug, Clone)]
pub struct PlayerStats {
    // Movement
    /// Distance moved per tick along a cardinal axis
    pub move_speed: f32,

    // Resource pools
    pub max_health: f32,
    pub max_stamina: f32,
    pub max_mana: f32,
    /// Stamina and mana restored per idle tick
    pub regen_rate: f32,
    /// Stamina drained per movement tick
    pub move_stamina_cost: f32,
    /// Stamina drained per shielding tick
    pub shield_stamina_cost: f32,
    /// Mana drained per attacking tick
    pub attack_mana_cost: f32,

    /// Lives granted at spawn and restored after a full game over
    pub starting_lives: u32,

    // Geometry
    /// Radius of the circle collider
    pub collider_radius: f32,
    /// Half sprite size used for screen-boundary clamping
    pub clamp_radius: f32,
    /// Radius of the shield overlay, slightly larger than the sprite
    pub shield_radius: f32,
}

/// The one tuning profile used by every player entity
pub const BASE_STATS: PlayerStats = PlayerStats {
    move_speed: 2.0,

    max_health: 100.0,
    max_stamina: 100.0,
    max_mana: 100.0,
    regen_rate: 0.5,
    move_stamina_cost: 0.05,
    shield_stamina_cost: 0.05,
    attack_mana_cost: 1.0,

    starting_lives: 4,

    collider_radius: 10.0,
    clamp_radius: 32.0,
    shield_radius: 90.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl PlayerStats {
    /// Get the standard tuning profile
    pub fn standard() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_equals_base() {
        let stats = PlayerStats::default();
        assert_eq!(stats.move_speed, BASE_STATS.move_speed);
        assert_eq!(stats.max_mana, BASE_STATS.max_mana);
        assert_eq!(stats.starting_lives, BASE_STATS.starting_lives);
    }

    #[test]
    fn test_costs_fit_inside_pools() {
        let stats = PlayerStats::standard();
        assert!(stats.move_stamina_cost < stats.max_stamina);
        assert!(stats.shield_stamina_cost < stats.max_stamina);
        assert!(stats.attack_mana_cost < stats.max_mana);
        assert!(stats.regen_rate > 0.0);
    }

    #[test]
    fn test_clamp_radius_covers_collider() {
        let stats = PlayerStats::standard();
        assert!(stats.clamp_radius >= stats.collider_radius);
    }
}
