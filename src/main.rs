//! Sparkle Grove entry point
//!
//! Runs a short scripted headless session: walk to a plot, water it, wait
//! out the growth cycle, harvest. Front ends embed the library instead of
//! running this binary; it exists to exercise the core without a renderer.

use std::path::Path;

use sparkle_grove::consts::SIM_DT;
use sparkle_grove::sim::{tick, GameState, TickInput};
use sparkle_grove::Settings;

fn main() {
    env_logger::init();
    log::info!("Sparkle Grove (headless) starting...");

    let settings = Settings::load(Path::new("settings.json"));
    let mut state = GameState::new(0x5EED);

    // Walk toward the plot grid until the first plot is in reach
    let target = state.plots[0].anchor();
    while state.player.pos.distance(target) > 1.0 {
        let intent = (target - state.player.pos).clamp_length_max(1.0);
        let input = TickInput {
            intent,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
    }
    log::info!(
        "reached plot (0, 0) after {} ticks at {:?}",
        state.time_ticks,
        state.player.pos
    );

    // Water, burst some sparkle particles, then wait out the growth cycle
    let water = TickInput {
        interact: true,
        ..Default::default()
    };
    tick(&mut state, &water, SIM_DT);
    state.spawn_effect(state.player.pos, settings.effect_burst_count());

    let idle = TickInput::default();
    while !state.plots[0].is_harvestable() {
        tick(&mut state, &idle, SIM_DT);
    }
    log::info!(
        "plot matured at tick {} (watered: {})",
        state.time_ticks,
        state.plots[0].watered
    );

    tick(&mut state, &water, SIM_DT);
    for event in state.drain_events() {
        log::info!("event: {event:?}");
    }

    let player = &state.player;
    log::info!(
        "session done: {} sparkles, {} xp (farm level {}), {} particles live",
        player.sparkles,
        player.farming_xp,
        player.farm_level(),
        state.particles.len()
    );

    println!(
        "Player: {:?} bear | Sparkles: {} | Farm Level: {} | Zone: {}",
        player.bear,
        player.sparkles,
        player.farm_level(),
        state.zone.name()
    );
}
