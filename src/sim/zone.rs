//! World zones
//!
//! The world is a small closed set of zones; only the orchard carries farm
//! plots, and the racetrack flips the player into race mode. Zone selection
//! is a label plus a spawn point - the zone itself holds no mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A region of the game world the player can travel to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Zone {
    #[default]
    OrchardGarden,
    CottonCandyFields,
    LollipopForest,
    RainbowRacetrack,
}

impl Zone {
    /// Display name shown by front ends
    pub fn name(&self) -> &'static str {
        match self {
            Zone::OrchardGarden => "Orchard Garden",
            Zone::CottonCandyFields => "Cotton Candy Fields",
            Zone::LollipopForest => "Lollipop Forest",
            Zone::RainbowRacetrack => "Rainbow Racetrack",
        }
    }

    /// Where the player lands when entering this zone
    pub fn spawn_point(&self) -> Vec2 {
        match self {
            Zone::OrchardGarden => Vec2::new(0.0, 10.0),
            Zone::CottonCandyFields => Vec2::new(-25.0, 0.0),
            Zone::LollipopForest => Vec2::new(25.0, 0.0),
            Zone::RainbowRacetrack => Vec2::new(0.0, 50.0),
        }
    }

    /// Entering the racetrack puts the player in race mode
    pub fn is_racetrack(&self) -> bool {
        matches!(self, Zone::RainbowRacetrack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clamp_to_bounds;

    #[test]
    fn test_spawn_points_inside_bounds() {
        for zone in [
            Zone::OrchardGarden,
            Zone::CottonCandyFields,
            Zone::LollipopForest,
            Zone::RainbowRacetrack,
        ] {
            let spawn = zone.spawn_point();
            assert_eq!(spawn, clamp_to_bounds(spawn), "{} spawn", zone.name());
        }
    }

    #[test]
    fn test_only_racetrack_races() {
        assert!(Zone::RainbowRacetrack.is_racetrack());
        assert!(!Zone::OrchardGarden.is_racetrack());
        assert!(!Zone::CottonCandyFields.is_racetrack());
        assert!(!Zone::LollipopForest.is_racetrack());
    }
}
