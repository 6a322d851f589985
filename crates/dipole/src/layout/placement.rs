//! Symmetric speaker placement on the inset boundary.
//!
//! Two probe rays leave the listener at `facing ∓ span/2`. Each is intersected
//! with the four inset walls (with culling, so only the wall it exits through
//! survives). Both speakers are then put at the *shorter* of the two hit
//! distances, each along its own ray: the speaker nearer its wall limits the
//! other, and the pair stays mirror-symmetric about the facing direction.

use std::f64::consts::PI;

use tracing::debug;

use crate::geom2::{Boundary, GeomCfg, Ray, Vec2, Vec2Ext, Wall};

/// Speaker positions and the unit directions they were placed along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: Vec2,
    pub right: Vec2,
    pub left_dir: Vec2,
    pub right_dir: Vec2,
    /// Common listener-to-speaker distance.
    pub distance: f64,
}

/// First wall hit of `ray` among `bounds`, probing in `Wall::ALL` order.
pub fn first_wall_hit(ray: &Ray, bounds: &Boundary, cfg: &GeomCfg) -> Option<(Wall, Vec2)> {
    bounds.walls().find_map(|(wall, seg)| {
        ray.segment_intersection(seg, Some(wall.inward_normal()), cfg)
            .map(|p| (wall, p))
    })
}

/// Place both speakers, or `None` when either probe ray finds no wall.
///
/// `span` is in radians and must lie in (0, π); anything else is treated as
/// having no solution.
pub fn place_speakers(
    listener: &Ray,
    span: f64,
    bounds: &Boundary,
    cfg: &GeomCfg,
) -> Option<Placement> {
    if !(span > 0.0 && span < PI) {
        debug!(span, "span outside (0, π); no placement");
        return None;
    }
    let facing = listener.direction.angle_rad();
    let right_dir = Vec2::from_radians(facing - span / 2.0);
    let left_dir = Vec2::from_radians(facing + span / 2.0);

    let s = listener.position;
    let Some((right_wall, right_hit)) = first_wall_hit(&Ray::new(s, right_dir), bounds, cfg)
    else {
        debug!("right probe ray found no wall");
        return None;
    };
    let Some((left_wall, left_hit)) = first_wall_hit(&Ray::new(s, left_dir), bounds, cfg)
    else {
        debug!("left probe ray found no wall");
        return None;
    };

    let distance = (right_hit - s).norm().min((left_hit - s).norm());
    debug!(%right_wall, %left_wall, distance, "speakers placed");
    Some(Placement {
        left: s + left_dir * distance,
        right: s + right_dir * distance,
        left_dir,
        right_dir,
        distance,
    })
}
