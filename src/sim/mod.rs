//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The presentation layer samples input, calls [`tick`] once per frame and
//! reads the resulting state; it never mutates simulation state directly.

pub mod road;
pub mod scenery;
pub mod state;
pub mod tick;

pub use road::{RoadMesher, RoadSegment, road_offset};
pub use scenery::{SceneryItem, SceneryKind, generate_scenery, visible_range};
pub use state::{FailReason, GameEvent, GameState, Level, LevelConfig, TrackStatus, Vehicle};
pub use tick::{TickInput, autopilot_input, tick};
