//! Curated entry points (UNSTABLE).
//!
//! Important
//! - Prefer these re-exports over reaching into module internals; the module
//!   layout behind them may be reorganised.

// 2D geometry
pub use crate::geom2::{
    angle_diff, normalize_degrees, ray_segment_intersection, Boundary, GeomCfg, LineSegment, Ray,
    Vec2, Vec2Ext, Wall, WallOffsets,
};
// Layout pipeline
pub use crate::layout::{
    place_speakers, solve, solve_checked, solve_speakers, solve_with, Channel, InputError, Inputs,
    Layout, LayoutCache, Placement, Reflection, Reflections, SpeakerOutput, SpeakerPair, ToeIn,
    Unit,
};
pub use crate::layout::{reflection::wall_reflections, toe_in::toe_in_angle};
// Guideline checks
pub use crate::checks::{check, check_with, Check, ChannelChecks, Checks, Guideline};

/// Room-unit distance between the listener and where both speakers end up,
/// or `None` when no placement exists.
pub fn listening_distance(inputs: &Inputs) -> Option<f64> {
    let bounds = Boundary::inset(inputs.room, &inputs.offsets);
    place_speakers(&inputs.listener, inputs.span, &bounds, &GeomCfg::default())
        .map(|p| p.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listening_distance_matches_pipeline() {
        let inputs = Inputs::default();
        let d = listening_distance(&inputs).expect("default scene places speakers");
        let layout = solve(&inputs);
        let measured = layout.checks.listening_distance.value.expect("measured");
        assert!((d - measured).abs() < 1e-9);
        assert!(listening_distance(&inputs.with_span_degrees(0.0)).is_none());
    }
}
