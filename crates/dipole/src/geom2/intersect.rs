//! Ray–segment intersection with optional back-face culling.
//!
//! Solve `position + t1 * direction = a + t2 * (b - a)` via cross/dot products with
//! the ray's perpendicular `(-d.y, d.x)`. A hit requires `t1 >= 0` and `t2 ∈ [0, 1]`.
//!
//! Culling: walls carry a normal pointing into the region they bound. A ray whose
//! direction is within 90° of that normal moves away from the wall's inner face and
//! is rejected. This is what lets one ray probe every wall of a rectangle and keep
//! only the wall it leaves through.

use super::angles::angle_diff;
use super::types::{GeomCfg, LineSegment, Ray, Vec2, Vec2Ext};

/// Nearest forward intersection of `ray` with `seg`, or `None`.
///
/// `normal`, if given, enables culling as described in the module docs.
pub fn ray_segment_intersection(
    ray: &Ray,
    seg: &LineSegment,
    normal: Option<Vec2>,
    cfg: &GeomCfg,
) -> Option<Vec2> {
    if let Some(n) = normal {
        if angle_diff(ray.direction.angle_deg(), n.angle_deg()) <= 90.0 {
            return None;
        }
    }
    let v1 = ray.position - seg.a;
    let v2 = seg.b - seg.a;
    let v3 = Vec2::new(-ray.direction.y, ray.direction.x);

    let dot = v2.dot(&v3);
    if dot.abs() < cfg.eps_parallel {
        return None;
    }
    let t1 = v2.cross2(&v1) / dot;
    let t2 = v1.dot(&v3) / dot;
    if t1 >= 0.0 && (0.0..=1.0).contains(&t2) {
        Some(seg.a + v2 * t2)
    } else {
        None
    }
}

impl Ray {
    /// See [`ray_segment_intersection`].
    #[inline]
    pub fn segment_intersection(
        &self,
        seg: &LineSegment,
        normal: Option<Vec2>,
        cfg: &GeomCfg,
    ) -> Option<Vec2> {
        ray_segment_intersection(self, seg, normal, cfg)
    }
}
