//! Game state and core simulation types
//!
//! Single source of truth for one play session. Front ends read this state
//! after each tick and must treat it as a snapshot - all mutation goes
//! through [`tick`](super::tick::tick) and the interaction methods here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::consts::*;
use crate::plot_anchor;

/// Gummy bear variants the player can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BearKind {
    #[default]
    Brown,
    Pink,
    Blue,
}

impl BearKind {
    /// Each bear comes with a matching race tractor (cosmetic data only)
    pub fn tractor(&self) -> Tractor {
        match self {
            BearKind::Brown => Tractor {
                color: "Brown",
                icon: "Apple",
                perk: "Durable",
            },
            BearKind::Pink => Tractor {
                color: "Pink",
                icon: "Cotton",
                perk: "Boost",
            },
            BearKind::Blue => Tractor {
                color: "Blue",
                icon: "Lollipop",
                perk: "Handling",
            },
        }
    }
}

/// Race tractor loadout, fixed per bear variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tractor {
    pub color: &'static str,
    pub icon: &'static str,
    pub perk: &'static str,
}

/// Crop varieties a plot can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Crop {
    #[default]
    AppleTree,
}

impl Crop {
    pub fn name(&self) -> &'static str {
        match self {
            Crop::AppleTree => "Apple Tree",
        }
    }

    /// Sparkles credited when a mature crop is harvested
    pub fn reward(&self) -> u32 {
        match self {
            Crop::AppleTree => 15,
        }
    }
}

/// The player's gummy bear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Logical position in world units (clamped to the playable area)
    pub pos: Vec2,
    /// Last rendered pixel position, written back by the renderer each frame
    /// so effect bursts can originate from the drawn bear
    #[serde(skip)]
    pub screen_pos: Vec2,
    /// Currency balance
    pub sparkles: u32,
    /// Farming experience (10 per harvest)
    pub farming_xp: u32,
    /// Set while the player is on the racetrack
    pub in_race: bool,
    /// Bear variant (selects the tractor loadout)
    pub bear: BearKind,
}

impl Player {
    pub fn new(bear: BearKind, spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            screen_pos: Vec2::ZERO,
            sparkles: STARTING_SPARKLES,
            farming_xp: 0,
            in_race: false,
            bear,
        }
    }

    /// Farm level derived from XP (level = sqrt(xp / 100))
    pub fn farm_level(&self) -> u32 {
        ((self.farming_xp / 100) as f32).sqrt() as u32
    }
}

/// A single farmable grid cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmPlot {
    pub grid_x: i32,
    pub grid_y: i32,
    pub crop: Crop,
    /// Growth progress, always in [0, 1]; 1.0 means harvestable
    pub growth: f32,
    /// Whether the soil is currently wet (faster growth)
    pub watered: bool,
    /// Seconds until the watered state dries out; > 0 implies `watered`
    pub watered_timer: f32,
}

impl FarmPlot {
    pub fn new(grid_x: i32, grid_y: i32, crop: Crop, growth: f32) -> Self {
        Self {
            grid_x,
            grid_y,
            crop,
            growth: growth.clamp(0.0, 1.0),
            watered: false,
            watered_timer: 0.0,
        }
    }

    /// World-space anchor used for interaction range checks
    pub fn anchor(&self) -> Vec2 {
        plot_anchor(self.grid_x, self.grid_y)
    }

    pub fn is_harvestable(&self) -> bool {
        self.growth >= 1.0
    }

    /// Wet the soil and restart the dry-out timer
    pub fn water(&mut self) {
        self.watered = true;
        self.watered_timer = WATERED_DURATION;
    }

    /// Take the mature crop, resetting growth; returns the sparkle reward.
    /// The watered state is untouched - wet soil stays wet for the next cycle.
    pub fn harvest(&mut self) -> u32 {
        self.growth = 0.0;
        self.crop.reward()
    }

    /// Advance growth and the dry-out timer by dt seconds. The two are
    /// decoupled: the timer can expire mid-cycle without losing growth.
    pub fn grow(&mut self, dt: f32) {
        if self.growth < 1.0 {
            let rate = if self.watered {
                WATERED_GROWTH_RATE
            } else {
                GROWTH_RATE
            };
            self.growth = (self.growth + rate * dt).min(1.0);
        }

        if self.watered_timer > 0.0 {
            self.watered_timer -= dt;
            if self.watered_timer <= 0.0 {
                self.watered_timer = 0.0;
                self.watered = false;
            }
        }
    }
}

/// A particle for visual effects (not gameplay-affecting)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases over time; pruned at <= 0
    pub life: f32,
    /// Color slot assigned at spawn, stable for the particle's lifetime
    pub color_index: u8,
}

/// Hard cap on live particles; oldest are dropped first when exceeded
pub const MAX_PARTICLES: usize = 256;

/// Interaction outcomes for front ends (sounds, toasts). Drained each frame;
/// never read by the simulation itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Harvested { reward: u32 },
    Watered,
    ZoneEntered { zone: Zone },
}

/// Complete game state for one session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all randomness (particle bursts) flows through this
    rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Active zone
    pub zone: Zone,
    /// The local player
    pub player: Player,
    /// Fixed plot grid, row-major, never resized
    pub plots: Vec<FarmPlot>,
    /// Visual particles, spawn order preserved
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Pending interaction events, drained by the front end
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session: player at the orchard spawn with the starting
    /// balance, a half-grown unwatered plot grid, no particles.
    pub fn new(seed: u64) -> Self {
        let zone = Zone::OrchardGarden;
        let mut plots = Vec::with_capacity((PLOT_COLS * PLOT_ROWS) as usize);
        for y in 0..PLOT_ROWS {
            for x in 0..PLOT_COLS {
                plots.push(FarmPlot::new(x, y, Crop::AppleTree, 0.5));
            }
        }

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            zone,
            player: Player::new(BearKind::Brown, zone.spawn_point()),
            plots,
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Water or harvest every plot within reach of the player.
    ///
    /// A plot that is both in range and mature is harvested, never
    /// re-watered. A no-op when nothing is in range.
    pub fn interact(&mut self) {
        let player_pos = self.player.pos;
        for plot in &mut self.plots {
            if plot.anchor().distance(player_pos) > INTERACT_RADIUS {
                continue;
            }

            if plot.is_harvestable() {
                let reward = plot.harvest();
                self.player.sparkles += reward;
                self.player.farming_xp += HARVEST_XP;
                self.events.push(GameEvent::Harvested { reward });
                log::debug!(
                    "harvested {} at ({}, {}): +{} sparkles",
                    plot.crop.name(),
                    plot.grid_x,
                    plot.grid_y,
                    reward
                );
            } else {
                plot.water();
                self.events.push(GameEvent::Watered);
                log::debug!("watered plot ({}, {})", plot.grid_x, plot.grid_y);
            }
        }
    }

    /// Burst `count` particles around `origin` (typically the player's
    /// screen position). Each starts at full life with an upward-biased
    /// velocity and a color slot from the session RNG.
    pub fn spawn_effect(&mut self, origin: Vec2, count: usize) {
        for _ in 0..count {
            let offset = Vec2::new(
                self.rng.random_range(-EFFECT_SPAWN_SPREAD..=EFFECT_SPAWN_SPREAD),
                self.rng.random_range(-EFFECT_SPAWN_SPREAD..=EFFECT_SPAWN_SPREAD),
            );
            // Screen convention: y grows downward, so upward is negative
            let vel = Vec2::new(
                self.rng.random_range(-EFFECT_SPEED_X..=EFFECT_SPEED_X),
                -self.rng.random_range(0.0..=EFFECT_SPEED_Y),
            );
            self.particles.push(Particle {
                pos: origin + offset,
                vel,
                life: 1.0,
                color_index: self.rng.random_range(0..PARTICLE_COLOR_COUNT),
            });
        }

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(0..excess);
        }
    }

    /// Travel to another zone: relocate the player to its spawn point and
    /// enter/leave race mode. A no-op for the current zone.
    pub fn enter_zone(&mut self, zone: Zone) {
        if zone == self.zone {
            return;
        }
        self.zone = zone;
        self.player.pos = zone.spawn_point();
        self.player.in_race = zone.is_racetrack();
        self.events.push(GameEvent::ZoneEntered { zone });
        log::info!("entered {}", zone.name());
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
