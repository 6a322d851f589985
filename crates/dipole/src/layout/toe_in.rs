//! Toe-in: inward baffle rotation and the aim point in front of the listener.
//!
//! The candidate aim direction is the speaker → side-reflection direction turned
//! by 90° toward the room's centre line (clockwise for the right channel,
//! counterclockwise for the left). The toe-in angle is the signed difference
//! between that direction and the reversed placement direction (speaker → listener),
//! measured so that inward rotation is positive for both channels.

use tracing::trace;

use super::reflection::Reflection;
use crate::checks::Guideline;
use crate::geom2::{normalize_degrees, GeomCfg, Ray, Vec2, Vec2Ext};

/// Stereo channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Left,
    Right,
}

impl Channel {
    /// Offset from the speaker's outward direction to the wall on its own side.
    #[inline]
    pub fn side_offset_deg(self) -> f64 {
        match self {
            Channel::Left => 90.0,
            Channel::Right => 270.0,
        }
    }

    /// Rotation applied to the side-reflection direction to get the aim direction.
    #[inline]
    fn aim_rotation_deg(self) -> f64 {
        match self {
            Channel::Left => 90.0,
            Channel::Right => -90.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Left => "left",
            Channel::Right => "right",
        }
    }
}

/// Accepted toe-in: where the baffle points and by how much it is rotated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToeIn {
    /// Aim point on the listener's facing line.
    pub pos: Vec2,
    pub angle_deg: f64,
}

/// Signed toe-in angle (degrees, in (-180, 180]) and the unit aim direction.
///
/// Computed from exact directions. Rounding each direction to whole degrees first
/// would shift the result by up to about 1°, which matters only right at the edges
/// of the toe-in window.
pub fn toe_in_angle(
    channel: Channel,
    speaker: Vec2,
    outward: Vec2,
    side: &Reflection,
) -> (f64, Vec2) {
    let side_deg = (side.reflect_pos - speaker).angle_deg();
    let aim_dir = Vec2::from_degrees(normalize_degrees(side_deg + channel.aim_rotation_deg()));
    let toward_listener = (-outward).angle_deg();
    let deg = match channel {
        Channel::Right => normalize_degrees(toward_listener - aim_dir.angle_deg()),
        Channel::Left => normalize_degrees(aim_dir.angle_deg() - toward_listener),
    };
    (deg, aim_dir)
}

/// Toe-in for one speaker, or `None` when the angle falls outside the guideline's
/// toe-in window or the aim ray misses the listener's facing line.
pub fn toe_in(
    channel: Channel,
    speaker: Vec2,
    outward: Vec2,
    side: &Reflection,
    listener: &Ray,
    guideline: &Guideline,
    cfg: &GeomCfg,
) -> Option<ToeIn> {
    let (angle_deg, aim_dir) = toe_in_angle(channel, speaker, outward, side);
    if !guideline.toe_in_ok(angle_deg) {
        trace!(channel = channel.name(), angle_deg, "toe-in outside window");
        return None;
    }
    let facing_line = listener.line_segment(cfg.listener_line_half_len);
    let pos = Ray::new(speaker, aim_dir).segment_intersection(&facing_line, None, cfg)?;
    Some(ToeIn { pos, angle_deg })
}
