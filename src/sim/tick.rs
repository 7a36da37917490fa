//! Fixed timestep simulation tick
//!
//! One tick integrates the vehicle from the sampled input, then evaluates
//! track progress: stagnation, off-road deviation against the centerline,
//! and the distance goal. Terminal states are no-ops.

use super::road::road_offset;
use super::state::{FailReason, GameEvent, GameState, TrackStatus};
use crate::consts::ROAD_HALF_WIDTH;

/// Key state for a single tick, sampled at the tick boundary.
///
/// Keys are last-known-state: transitions between ticks are not queued or
/// replayed, the tick only sees the state at its own boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Steering target in {-1, 0, 1}; opposing keys cancel out
    #[inline]
    pub fn steer_target(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }
}

/// Advance the game by one timestep of `dt` seconds.
///
/// Returns the terminal transition if this tick produced one. At most one
/// fires per tick: stalling is checked first, then off-road, then the goal,
/// so failure always takes precedence over a win in the same tick. Once the
/// status is terminal, further ticks leave the state untouched and return
/// `None`, which makes both events exactly-once.
///
/// A degenerate `dt` (zero, negative or non-finite) is tolerated as a no-op
/// so a bad frame clock can never produce non-finite state.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameEvent> {
    if state.status.is_terminal() {
        return None;
    }
    if !(dt > 0.0 && dt.is_finite()) {
        return None;
    }

    state.time_ticks += 1;

    state
        .vehicle
        .integrate(input.forward, input.steer_target(), &state.tuning, dt);
    state.distance_traveled = state.vehicle.distance;

    // Stagnation: continuous time spent effectively stopped
    if state.vehicle.speed < state.tuning.stall_speed {
        state.stagnation_secs += dt;
    } else {
        state.stagnation_secs = 0.0;
    }
    if state.stagnation_secs > state.tuning.stall_timeout {
        state.status = TrackStatus::Failed(FailReason::Stalled);
        return Some(GameEvent::Failed(FailReason::Stalled));
    }

    // Off-road: generous tolerance past the edge keeps the game forgiving
    let limit = ROAD_HALF_WIDTH + state.tuning.off_road_tolerance;
    if state.deviation().abs() > limit {
        state.status = TrackStatus::Failed(FailReason::OffRoad);
        return Some(GameEvent::Failed(FailReason::OffRoad));
    }

    if state.distance_traveled >= state.config.distance_goal {
        state.status = TrackStatus::Won;
        return Some(GameEvent::Won);
    }

    None
}

/// How far ahead the autopilot aims on the centerline (metres)
const AUTOPILOT_LOOKAHEAD: f32 = 30.0;
/// Prediction horizon damping the bang-bang steering (seconds)
const AUTOPILOT_HORIZON: f32 = 0.35;
/// Lateral error below which the autopilot keeps the wheel centered (metres)
const AUTOPILOT_DEADBAND: f32 = 1.0;

/// Demo/attract-mode driver: full throttle, steering toward the centerline.
///
/// Predicts the car's lateral position a short horizon ahead from the current
/// steering state, then picks the key that closes the gap to the centerline
/// at the lookahead distance. Produces the same digital input a player would.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let vehicle = &state.vehicle;
    let target = road_offset(vehicle.distance + AUTOPILOT_LOOKAHEAD, state.config.curvy);
    let lateral_rate = vehicle.steer_amount * vehicle.speed * state.tuning.lateral_scale;
    let predicted = vehicle.lateral + lateral_rate * AUTOPILOT_HORIZON;
    let error = target - predicted;

    TickInput {
        forward: true,
        left: error < -AUTOPILOT_DEADBAND,
        right: error > AUTOPILOT_DEADBAND,
    }
}
