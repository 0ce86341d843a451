use anyhow::Result;
use log::info;

use emberwake::{Event, PlayerManager, RenderQueue, WorldBounds};

/// Simulation tick length (60 updates per second)
const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Emberwake headless session...");

    let bounds = WorldBounds::new(1280.0, 720.0);
    let mut manager = PlayerManager::new(bounds);
    let hero = manager.spawn("Hero")?;

    let mut queue = RenderQueue::new();

    // Scripted session: wander, attack, shield, die, come back
    let script: &[(Event, u32)] = &[
        (Event::MoveUp, 30),
        (Event::MoveRight, 30),
        (Event::Attack, 45),
        (Event::None, 20),
        (Event::Shield, 40),
        (Event::MoveLeft, 20),
        (Event::Die, 150),
        (Event::None, 30),
    ];

    for &(event, ticks) in script {
        manager.dispatch(hero, event);
        for _ in 0..ticks {
            manager.tick(hero, DT, &mut queue);
        }

        if let Some(player) = manager.get(hero) {
            info!(
                "{}: state={} pos=({:.0},{:.0}) hp={:.0} stamina={:.1} mana={:.1} lives={} draws={}",
                player.name(),
                player.state_name(),
                player.position().x,
                player.position().y,
                player.health().current(),
                player.stamina().current(),
                player.mana().current(),
                player.lives(),
                queue.len(),
            );
        }

        // A real frame would drain into the renderer here
        queue.clear();
    }

    info!("Session complete");
    Ok(())
}
