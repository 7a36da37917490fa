//! Road centerline curve and segment tessellation
//!
//! The centerline curve is the single source of truth for road shape. The
//! mesher and the off-road check both evaluate it independently, so it must
//! stay a pure function of (distance, shape) with no hidden state.

use glam::Vec2;

/// Warm-up stretch before the first bend on winding levels (metres)
pub const CURVE_WARMUP: f32 = 400.0;

/// Long-wave sine for flow
const PRIMARY_FREQ: f32 = 0.003;
const PRIMARY_AMP: f32 = 55.0;
/// Subtle secondary wave for variety
const SECONDARY_FREQ: f32 = 0.001;
const SECONDARY_AMP: f32 = 35.0;

/// Steepest lateral slope the centerline can produce (metres sideways per
/// metre forward). The vehicle's lateral authority at full speed must exceed
/// this times the forward rate, or winding levels become unwinnable.
pub const MAX_SLOPE: f32 = PRIMARY_FREQ * PRIMARY_AMP + SECONDARY_FREQ * SECONDARY_AMP;

/// Lateral offset of the road centerline at a longitudinal distance.
///
/// Straight roads sit on the axis. Winding roads run straight through the
/// warm-up, then follow two superimposed sine waves. Distances past the level
/// length are valid inputs (scenery is scattered beyond the goal) and always
/// produce a finite value.
#[inline]
pub fn road_offset(distance: f32, curvy: bool) -> f32 {
    if !curvy || distance < CURVE_WARMUP {
        return 0.0;
    }
    let d = distance - CURVE_WARMUP;
    (d * PRIMARY_FREQ).sin() * PRIMARY_AMP + (d * SECONDARY_FREQ).sin() * SECONDARY_AMP
}

/// Mesher tessellation step along the road (metres)
pub const ROAD_STEP: f32 = 4.0;
/// Extra length added to every segment so curved sections show no seams
pub const SEGMENT_OVERLAP: f32 = 0.2;

/// One tessellated slab of road surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadSegment {
    /// Chord midpoint: x lateral, y longitudinal
    pub center: Vec2,
    /// Yaw away from the longitudinal axis (radians)
    pub heading: f32,
    /// Chord length including the seam overlap
    pub length: f32,
}

/// Derives discretized road geometry from the centerline curve.
///
/// Pure arithmetic over `(curvy, road_length, step)`: restarting the iterator
/// reproduces the identical sequence.
#[derive(Debug, Clone, Copy)]
pub struct RoadMesher {
    curvy: bool,
    road_length: f32,
    step: f32,
}

impl RoadMesher {
    pub fn new(curvy: bool, road_length: f32, step: f32) -> Self {
        Self {
            curvy,
            road_length,
            step,
        }
    }

    /// Mesher for a level at the default step
    pub fn for_level(config: &super::state::LevelConfig) -> Self {
        Self::new(config.curvy, config.road_length(), ROAD_STEP)
    }

    /// Number of segments covering `[0, road_length)`
    pub fn segment_count(&self) -> usize {
        (self.road_length / self.step).ceil() as usize
    }

    /// Lazily yield the ordered segment sequence
    pub fn segments(&self) -> impl Iterator<Item = RoadSegment> + '_ {
        let step = self.step;
        let curvy = self.curvy;
        (0..self.segment_count()).map(move |i| {
            let z = i as f32 * step;
            let x1 = road_offset(z, curvy);
            let x2 = road_offset(z + step, curvy);
            let dx = x2 - x1;
            RoadSegment {
                center: Vec2::new(x1 + dx / 2.0, z + step / 2.0),
                heading: dx.atan2(step),
                length: (dx * dx + step * step).sqrt() + SEGMENT_OVERLAP,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_straight_road_is_flat() {
        for d in [0.0, 100.0, 400.0, 999.0, 3000.0, 1e7] {
            assert_eq!(road_offset(d, false), 0.0);
        }
    }

    #[test]
    fn test_winding_road_warmup_is_flat() {
        assert_eq!(road_offset(0.0, true), 0.0);
        assert_eq!(road_offset(399.9, true), 0.0);
        assert_ne!(road_offset(1000.0, true), 0.0);
    }

    #[test]
    fn test_offset_bounded_by_wave_amplitudes() {
        let bound = 55.0 + 35.0;
        let mut d = 0.0;
        while d < 20_000.0 {
            assert!(road_offset(d, true).abs() <= bound);
            d += 7.3;
        }
    }

    #[test]
    fn test_offset_finite_past_level_length() {
        // Scenery padding samples the curve well past the goal
        assert!(road_offset(1e9, true).is_finite());
        assert!(road_offset(f32::MAX, true).is_finite());
    }

    #[test]
    fn test_mesher_covers_road_without_gaps() {
        let mesher = RoadMesher::new(true, 10_000.0, ROAD_STEP);
        let segments: Vec<_> = mesher.segments().collect();
        assert_eq!(segments.len(), mesher.segment_count());

        // Longitudinal extents tile [0, L) exactly
        let mut expected_start = 0.0;
        for seg in &segments {
            let start = seg.center.y - ROAD_STEP / 2.0;
            assert!((start - expected_start).abs() < 1e-3);
            expected_start = start + ROAD_STEP;
        }
        assert!(expected_start >= 10_000.0);
    }

    #[test]
    fn test_mesher_segment_geometry() {
        let mesher = RoadMesher::new(true, 10_000.0, ROAD_STEP);
        for seg in mesher.segments() {
            let z = seg.center.y - ROAD_STEP / 2.0;
            let dx = road_offset(z + ROAD_STEP, true) - road_offset(z, true);
            assert!((seg.heading - dx.atan2(ROAD_STEP)).abs() < 1e-5);
            let chord = (dx * dx + ROAD_STEP * ROAD_STEP).sqrt();
            assert!((seg.length - (chord + SEGMENT_OVERLAP)).abs() < 1e-4);
            // Chord plus overlap always spans the slab it covers
            assert!(seg.length >= ROAD_STEP);
        }
    }

    #[test]
    fn test_mesher_restart_is_identical() {
        let mesher = RoadMesher::new(true, 2_000.0, ROAD_STEP);
        let a: Vec<_> = mesher.segments().collect();
        let b: Vec<_> = mesher.segments().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_straight_segments_have_zero_heading() {
        let mesher = RoadMesher::new(false, 1_000.0, ROAD_STEP);
        for seg in mesher.segments() {
            assert_eq!(seg.heading, 0.0);
            assert_eq!(seg.center.x, 0.0);
            assert!((seg.length - (ROAD_STEP + SEGMENT_OVERLAP)).abs() < 1e-5);
        }
    }

    proptest! {
        #[test]
        fn prop_offset_is_finite(d in 0.0f32..1e8) {
            prop_assert!(road_offset(d, true).is_finite());
            prop_assert!(road_offset(d, false).is_finite());
        }

        #[test]
        fn prop_slope_stays_drivable(d in 0.0f32..100_000.0) {
            // Rate of change between adjacent mesher samples never exceeds
            // the analytic slope bound
            let delta = road_offset(d + ROAD_STEP, true) - road_offset(d, true);
            prop_assert!(delta.abs() <= MAX_SLOPE * ROAD_STEP + 1e-3);
        }
    }
}
