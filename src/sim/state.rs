//! Game state and core simulation types
//!
//! Everything that defines one level attempt lives here: the level
//! configuration, the vehicle's integrators and the track progress that the
//! evaluator drives to a terminal status. Restarting a level builds a fresh
//! [`GameState`] rather than resetting one in place.

use serde::{Deserialize, Serialize};

use super::road;
use super::scenery::{self, SceneryItem};
use crate::consts::ROAD_PADDING;
use crate::lerp;
use crate::tuning::Tuning;

/// Built-in levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Short straight run to get a feel for the car
    StraightSprint,
    /// The long winding ridge
    WindingRidge,
}

impl Level {
    pub fn config(self) -> LevelConfig {
        match self {
            Level::StraightSprint => LevelConfig {
                distance_goal: 1000.0,
                curvy: false,
                label: "Straight Sprint (1 km)".to_string(),
            },
            Level::WindingRidge => LevelConfig {
                distance_goal: 8000.0,
                curvy: true,
                label: "Winding Ridge (8 km)".to_string(),
            },
        }
    }
}

/// Static per-level configuration, fixed at level start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Longitudinal distance that wins the level (metres)
    pub distance_goal: f32,
    /// Selects the winding centerline instead of a straight one
    pub curvy: bool,
    /// Human-readable menu label
    pub label: String,
}

impl LevelConfig {
    /// A non-positive or non-finite goal is a configuration error and must be
    /// rejected before the simulation starts
    pub fn is_valid(&self) -> bool {
        self.distance_goal.is_finite() && self.distance_goal > 0.0
    }

    /// Full extent of road mesh and scenery, past the goal so the horizon
    /// never runs out
    pub fn road_length(&self) -> f32 {
        self.distance_goal + ROAD_PADDING
    }

    /// Centerline offset at a longitudinal distance for this level's shape
    #[inline]
    pub fn road_offset(&self, distance: f32) -> f32 {
        road::road_offset(distance, self.curvy)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    OffRoad,
    Stalled,
}

impl FailReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailReason::OffRoad => "off-road",
            FailReason::Stalled => "stalled",
        }
    }
}

/// Track progress status. `Won` and `Failed` are terminal; only an external
/// restart (a fresh [`GameState`]) leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackStatus {
    Playing,
    Won,
    Failed(FailReason),
}

impl TrackStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrackStatus::Playing)
    }
}

/// Terminal transition raised by a tick, surfaced exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Won,
    Failed(FailReason),
}

/// The player's car: two independent scalar integrators plus world pose
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Normalized longitudinal speed in `[0, max_speed]`
    pub speed: f32,
    /// Smoothed steering in `[-1, 1]`; analog feel from digital keys
    pub steer_amount: f32,
    /// Lateral offset from the level origin (metres)
    pub lateral: f32,
    /// Longitudinal distance from the start line (metres)
    pub distance: f32,
}

impl Vehicle {
    /// Advance both integrators by one timestep.
    ///
    /// `steer_target` is -1, 0 or 1 from the key map. All rates are
    /// dt-scaled, so the integration is independent of the driving frame
    /// rate under the fixed-timestep loop.
    pub fn integrate(&mut self, throttle: bool, steer_target: f32, tuning: &Tuning, dt: f32) {
        if throttle {
            self.speed = (self.speed + tuning.acceleration * dt).min(tuning.max_speed);
        } else {
            self.speed = (self.speed - tuning.friction * dt).max(0.0);
        }

        // Ramp toward the held direction, or back to center on release
        let rate = if steer_target != 0.0 {
            tuning.steer_react
        } else {
            tuning.steer_return
        };
        self.steer_amount = lerp(self.steer_amount, steer_target, rate * dt).clamp(-1.0, 1.0);

        self.distance += self.speed * tuning.forward_scale * dt;
        // Lateral authority grows with speed: a parked car cannot steer
        self.lateral += self.steer_amount * self.speed * tuning.lateral_scale * dt;
    }
}

/// Complete state of one level attempt (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Scenery seed, kept so a run can be reproduced
    pub seed: u64,
    pub config: LevelConfig,
    pub status: TrackStatus,
    pub vehicle: Vehicle,
    /// Continuous time spent below the stall speed (seconds)
    pub stagnation_secs: f32,
    /// Longitudinal distance covered this attempt (metres)
    pub distance_traveled: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
    /// Generated once at load; rebuilt from `seed` after deserialization
    #[serde(skip)]
    pub scenery: Vec<SceneryItem>,
}

impl GameState {
    /// Start an attempt on a built-in level
    pub fn new(level: Level, seed: u64) -> Self {
        Self::with_config(level.config(), seed)
    }

    /// Start an attempt on an arbitrary level configuration
    pub fn with_config(config: LevelConfig, seed: u64) -> Self {
        assert!(
            config.is_valid(),
            "level config requires a positive, finite distance goal"
        );
        let scenery = scenery::generate_scenery(&config, seed);
        Self {
            seed,
            config,
            status: TrackStatus::Playing,
            vehicle: Vehicle::default(),
            stagnation_secs: 0.0,
            distance_traveled: 0.0,
            time_ticks: 0,
            tuning: Tuning::default(),
            scenery,
        }
    }

    /// Elapsed simulated time (seconds)
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }

    /// Signed lateral deviation of the car from the road centerline
    #[inline]
    pub fn deviation(&self) -> f32 {
        self.vehicle.lateral - self.config.road_offset(self.vehicle.distance)
    }

    /// Rebuild the `#[serde(skip)]` scenery after deserialization
    pub fn regenerate_scenery(&mut self) {
        self.scenery = scenery::generate_scenery(&self.config, self.seed);
    }
}
