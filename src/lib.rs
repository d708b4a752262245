//! Sparkle Grove - shared simulation core for a gummy bear farming & racing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, farm plots, particles, zones)
//! - `settings`: Player preferences and effect quality presets
//!
//! The crate holds no rendering or input code. Front ends (a GUI canvas, a
//! console view) translate their native input into a [`sim::TickInput`], call
//! [`sim::tick`] once per frame, and read the state back to draw.

pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation timestep (60 Hz); front ends may pass any dt
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player movement speed in world units per second
    pub const MOVE_SPEED: f32 = 30.0;
    /// Playable area, per-axis (wider below the horizon than above it)
    pub const PLAYER_MIN_X: f32 = -50.0;
    pub const PLAYER_MAX_X: f32 = 50.0;
    pub const PLAYER_MIN_Y: f32 = -30.0;
    pub const PLAYER_MAX_Y: f32 = 80.0;

    /// Plot grid dimensions (fixed for the whole session)
    pub const PLOT_COLS: i32 = 3;
    pub const PLOT_ROWS: i32 = 2;
    /// World-space spacing between plot anchors
    pub const PLOT_SPACING: f32 = 20.0;
    /// World-space position of plot (0, 0)
    pub const PLOT_ORIGIN_X: f32 = -20.0;
    pub const PLOT_ORIGIN_Y: f32 = 20.0;
    /// How close the player must be to a plot anchor to water/harvest it
    pub const INTERACT_RADIUS: f32 = 12.0;

    /// Growth per second for an unwatered plot
    pub const GROWTH_RATE: f32 = 0.03;
    /// Growth per second for a watered plot (4x unwatered)
    pub const WATERED_GROWTH_RATE: f32 = 0.12;
    /// Seconds a watering lasts before the soil dries out
    pub const WATERED_DURATION: f32 = 5.0;

    /// Sparkles a new player starts with
    pub const STARTING_SPARKLES: u32 = 100;
    /// Farming XP credited per harvest
    pub const HARVEST_XP: u32 = 10;

    /// Half-width of the uniform square particles spawn in around the origin
    pub const EFFECT_SPAWN_SPREAD: f32 = 25.0;
    /// Horizontal burst speed range (+/-) in units per second
    pub const EFFECT_SPEED_X: f32 = 90.0;
    /// Maximum upward burst speed in units per second
    pub const EFFECT_SPEED_Y: f32 = 120.0;
    /// Downward acceleration applied to particles, units per second squared
    pub const PARTICLE_GRAVITY: f32 = 360.0;
    /// Particle life lost per second (life starts at 1.0)
    pub const PARTICLE_LIFE_DECAY: f32 = 1.2;
    /// Number of distinct particle colors front ends should provide
    pub const PARTICLE_COLOR_COUNT: u8 = 6;
}

/// Clamp a position to the playable area, per axis
#[inline]
pub fn clamp_to_bounds(pos: Vec2) -> Vec2 {
    use consts::*;
    Vec2::new(
        pos.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X),
        pos.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y),
    )
}

/// World-space anchor of the plot at the given grid cell
#[inline]
pub fn plot_anchor(grid_x: i32, grid_y: i32) -> Vec2 {
    use consts::*;
    Vec2::new(
        PLOT_ORIGIN_X + grid_x as f32 * PLOT_SPACING,
        PLOT_ORIGIN_Y + grid_y as f32 * PLOT_SPACING,
    )
}
