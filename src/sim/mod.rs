//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit dt passed by the caller, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (plots by grid layout, particles by spawn order)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;
pub mod zone;

pub use state::{
    BearKind, Crop, FarmPlot, GameEvent, GameState, Particle, Player, Tractor, MAX_PARTICLES,
};
pub use tick::{tick, TickInput};
pub use zone::Zone;
