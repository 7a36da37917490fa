//! Data-driven drive-feel balance
//!
//! The drive feel went through many tuning passes; every gameplay constant
//! lives in one serializable struct so balance work edits data, not sim code.
//! Defaults match the shipped build.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::sim::road;

/// Drive-feel and track-evaluation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Throttle acceleration (normalized speed per second)
    pub acceleration: f32,
    /// Coasting friction (normalized speed per second)
    pub friction: f32,
    /// Speed cap (normalized)
    pub max_speed: f32,
    /// Steering ramp rate while a key is held (per second)
    pub steer_react: f32,
    /// Steering ramp rate back to center on release (per second)
    pub steer_return: f32,
    /// Forward metres per second at full speed
    pub forward_scale: f32,
    /// Lateral metres per second at full speed and full lock
    pub lateral_scale: f32,
    /// Speeds below this count as stalled (normalized)
    pub stall_speed: f32,
    /// Continuous stall time that ends the run (seconds)
    pub stall_timeout: f32,
    /// Forgiveness past the road edge before off-road fires (metres)
    pub off_road_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            acceleration: 0.9,
            friction: 0.3,
            max_speed: 1.0,
            steer_react: 4.5,
            steer_return: 6.0,
            forward_scale: 200.0,
            lateral_scale: 110.0,
            stall_speed: 0.02,
            stall_timeout: 5.0,
            off_road_tolerance: 5.0,
        }
    }
}

impl Tuning {
    /// Highest lateral rate the vehicle can reach (metres per second)
    pub fn max_lateral_rate(&self) -> f32 {
        self.max_speed * self.lateral_scale
    }

    /// Lateral rate needed to follow the steepest bend at full speed
    pub fn required_lateral_rate(&self) -> f32 {
        self.max_speed * self.forward_scale * road::MAX_SLOPE
    }

    /// Whether winding levels are winnable with this balance: the car must
    /// out-steer the steepest centerline drift at full speed
    pub fn is_drivable(&self) -> bool {
        self.max_lateral_rate() > self.required_lateral_rate()
    }

    /// Load a balance file, falling back to defaults when missing or invalid
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the balance file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
