//! Speaker layout: placement → reflections → toe-in → guideline checks.
//!
//! Purpose
//! - Turn an `Inputs` snapshot into a symmetric speaker pair plus the
//!   derived reflections, toe-in and checks, as one pure function.
//! - Absence is data: when no placement exists the pair is `None` and every
//!   check reports `passed = false, value = None`.
//!
//! Pipeline
//! - `Boundary::inset(room, offsets)` bounds where speakers may stand.
//! - `placement::place_speakers` casts the two probe rays and enforces symmetry.
//! - `reflection::wall_reflections` against the true room walls, then the back
//!   and side reflections are picked by closest angular match.
//! - `toe_in::toe_in` derives the baffle rotation from the side reflection.
//! - `checks::check_with` scores the result.
//!
//! References
//! - Code cross-refs: `geom2::{Boundary,Ray,ray_segment_intersection}`, `checks::Guideline`

mod cache;
mod inputs;
pub mod placement;
pub mod reflection;
pub mod toe_in;

pub use cache::LayoutCache;
pub use inputs::{InputError, Inputs, Unit};
pub use placement::{place_speakers, Placement};
pub use reflection::Reflection;
pub use toe_in::{Channel, ToeIn};

use tracing::debug;

use crate::checks::{check_with, Checks, Guideline};
use crate::geom2::{normalize_degrees, Boundary, GeomCfg, Vec2, Vec2Ext};

/// The two reflections that matter for one speaker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflections {
    /// Wall in the speaker's own outward direction (behind it, seen from the listener).
    pub back: Reflection,
    /// Wall on the speaker's outer side.
    pub side: Reflection,
}

/// Solved position and derived data for one channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeakerOutput {
    pub pos: Vec2,
    /// Unit direction from the listener toward this speaker.
    pub direction: Vec2,
    pub toe_in: Option<ToeIn>,
    pub reflections: Reflections,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeakerPair {
    pub left: SpeakerOutput,
    pub right: SpeakerOutput,
}

impl SpeakerPair {
    #[inline]
    pub fn get(&self, channel: Channel) -> &SpeakerOutput {
        match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        }
    }
}

/// Full result of one recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub speakers: Option<SpeakerPair>,
    pub checks: Checks,
}

/// Run the pipeline with default tolerances and the published guideline.
///
/// Assumes `inputs` already satisfy `Inputs::validate`; see `solve_checked`.
pub fn solve(inputs: &Inputs) -> Layout {
    solve_with(inputs, &GeomCfg::default(), &Guideline::default())
}

/// Validate `inputs`, then `solve`.
pub fn solve_checked(inputs: &Inputs) -> Result<Layout, InputError> {
    inputs.validate()?;
    Ok(solve(inputs))
}

pub fn solve_with(inputs: &Inputs, cfg: &GeomCfg, guideline: &Guideline) -> Layout {
    let speakers = solve_speakers(inputs, cfg, guideline);
    let checks = check_with(inputs, speakers.as_ref(), guideline);
    Layout { speakers, checks }
}

/// Speaker pair for `inputs`, or `None` if either channel has no placement.
pub fn solve_speakers(
    inputs: &Inputs,
    cfg: &GeomCfg,
    guideline: &Guideline,
) -> Option<SpeakerPair> {
    let bounds = Boundary::inset(inputs.room, &inputs.offsets);
    let placement = place_speakers(&inputs.listener, inputs.span, &bounds, cfg)?;
    let room = Boundary::room(inputs.room);
    let ctx = ChannelCtx {
        inputs,
        room: &room,
        cfg,
        guideline,
    };
    let right = ctx.output(Channel::Right, placement.right, placement.right_dir)?;
    let left = ctx.output(Channel::Left, placement.left, placement.left_dir)?;
    Some(SpeakerPair { left, right })
}

struct ChannelCtx<'a> {
    inputs: &'a Inputs,
    room: &'a Boundary,
    cfg: &'a GeomCfg,
    guideline: &'a Guideline,
}

impl ChannelCtx<'_> {
    fn output(&self, channel: Channel, pos: Vec2, direction: Vec2) -> Option<SpeakerOutput> {
        let listener = self.inputs.listener.position;
        let candidates = reflection::wall_reflections(self.room, pos, listener, self.cfg);
        let outward = direction.angle_deg();
        let side_deg = normalize_degrees(outward + channel.side_offset_deg());
        let back = reflection::closest_in_direction(&candidates, pos, outward).copied();
        let side = reflection::closest_in_direction(&candidates, pos, side_deg).copied();
        let (Some(back), Some(side)) = (back, side) else {
            debug!(channel = channel.name(), "no wall reflection lands; dropping pair");
            return None;
        };
        let toe_in = toe_in::toe_in(
            channel,
            pos,
            direction,
            &side,
            &self.inputs.listener,
            self.guideline,
            self.cfg,
        );
        Some(SpeakerOutput {
            pos,
            direction,
            toe_in,
            reflections: Reflections { back, side },
        })
    }
}
