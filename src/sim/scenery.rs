//! Procedural roadside scenery
//!
//! Decorative items are scattered once at level load from a seeded RNG and
//! are immutable afterwards. Placement follows the centerline curve so that
//! nothing ever lands inside the drivable corridor, no matter how the road
//! bends. Renderers may cull by distance without touching the placement set.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::road::road_offset;
use super::state::LevelConfig;
use crate::consts::ROAD_HALF_WIDTH;

/// Items scattered along a straight level
const DENSITY_STRAIGHT: usize = 500;
/// Winding levels are longer and get a denser spread
const DENSITY_CURVY: usize = 1000;

/// Fixed margin past the strict corridor clearance (metres)
const CLEARANCE_MARGIN: f32 = 100.0;
/// Random spread beyond the minimum clearance (metres)
const LATERAL_SPREAD: f32 = 800.0;

/// Ground footprint of a tree regardless of scale (metres)
const TREE_FOOTPRINT: f32 = 20.0;
/// Mountain footprint per unit of scale (cone base plus skirt)
const MOUNTAIN_FOOTPRINT_PER_SCALE: f32 = 35.0;

/// Decorative category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneryKind {
    Tree,
    Mountain,
}

/// A single placed decoration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneryItem {
    pub kind: SceneryKind,
    /// World position: x lateral, y longitudinal
    pub position: Vec2,
    pub scale: f32,
    /// Ground radius used for corridor clearance
    pub footprint_radius: f32,
}

/// Scatter scenery for a level.
///
/// Deterministic for a given `(config, seed)` pair. Every item keeps at least
/// `ROAD_HALF_WIDTH + footprint_radius` of lateral clearance from the
/// centerline, so the corridor stays free.
pub fn generate_scenery(config: &LevelConfig, seed: u64) -> Vec<SceneryItem> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let road_length = config.road_length();
    let count = if config.curvy {
        DENSITY_CURVY
    } else {
        DENSITY_STRAIGHT
    };

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let z = rng.random_range(0.0..road_length);
        let center = road_offset(z, config.curvy);
        let side = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let (kind, scale) = if rng.random::<f32>() > 0.2 {
            (SceneryKind::Tree, rng.random_range(3.5..4.5))
        } else {
            (SceneryKind::Mountain, rng.random_range(15.0..50.0))
        };
        let footprint_radius = match kind {
            SceneryKind::Tree => TREE_FOOTPRINT,
            SceneryKind::Mountain => MOUNTAIN_FOOTPRINT_PER_SCALE * scale,
        };

        let clearance = ROAD_HALF_WIDTH + footprint_radius + CLEARANCE_MARGIN;
        let x = center + side * (clearance + rng.random_range(0.0..LATERAL_SPREAD));

        items.push(SceneryItem {
            kind,
            position: Vec2::new(x, z),
            scale,
            footprint_radius,
        });
    }
    items
}

/// Items within `draw_distance` of the vehicle, for render culling
pub fn visible_range(
    items: &[SceneryItem],
    distance: f32,
    draw_distance: f32,
) -> impl Iterator<Item = &SceneryItem> {
    items
        .iter()
        .filter(move |item| (item.position.y - distance).abs() <= draw_distance)
}
