//! Simulation tick
//!
//! Single entry point that advances the game state by one step. The caller
//! (a frame timer, out of scope here) passes the elapsed time explicitly so
//! simulation speed never couples to frame rate.

use glam::Vec2;

use super::state::GameState;
use super::zone::Zone;
use crate::clamp_to_bounds;
use crate::consts::*;

/// Input for a single tick. One-shot flags (`interact`, `enter_zone`) are
/// consumed every tick; the driver clears them after each call.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized directional intent, each axis in [-1, 1] (clamped here
    /// regardless of what the input layer delivers)
    pub intent: Vec2,
    /// Water/harvest plots in reach this tick
    pub interact: bool,
    /// Travel to a zone this tick
    pub enter_zone: Option<Zone>,
}

/// Advance the game state by `dt` seconds.
///
/// Order per tick: one-shot actions, player displacement and bound clamping,
/// plot growth and dry-out timers, particle kinematics and pruning. Total
/// over its whole input domain - out-of-range intent is clamped, never
/// rejected.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if let Some(zone) = input.enter_zone {
        state.enter_zone(zone);
    }
    if input.interact {
        state.interact();
    }

    state.time_ticks += 1;

    // Player displacement, per axis, then clamp to the playable area
    let intent = Vec2::new(
        input.intent.x.clamp(-1.0, 1.0),
        input.intent.y.clamp(-1.0, 1.0),
    );
    state.player.pos = clamp_to_bounds(state.player.pos + intent * MOVE_SPEED * dt);

    for plot in &mut state.plots {
        plot.grow(dt);
    }

    // Particle kinematics: burst up, fall back, fade out. Pruning keeps the
    // spawn order of the survivors.
    for particle in &mut state.particles {
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
        particle.life -= PARTICLE_LIFE_DECAY * dt;
    }
    state.particles.retain(|p| p.life > 0.0);
}
