//! First-order specular reflections via the image-source method.
//!
//! For an axis-aligned wall, drop the perpendicular from the speaker onto the
//! wall's line (`wall_intersect`), mirror the speaker across it (`image_source`),
//! and cast a ray from the image toward the listener. Where that ray crosses the
//! finite wall is the reflection point. Reflections always use the true room
//! walls, never the clearance-inset ones.

use crate::geom2::{angle_diff, Boundary, GeomCfg, LineSegment, Ray, Vec2, Vec2Ext, Wall};

/// A wall reflection that lands on its wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection {
    pub wall: Wall,
    /// Foot of the perpendicular from the speaker onto the wall's line.
    pub wall_intersect: Vec2,
    pub image_source: Vec2,
    /// Point on the wall where the speaker → wall → listener path bounces.
    pub reflect_pos: Vec2,
}

/// Reflection of `speaker` off `seg` toward `listener`; `None` if the bounce
/// point falls outside the finite wall (or the geometry is degenerate).
pub fn reflect(
    wall: Wall,
    seg: &LineSegment,
    speaker: Vec2,
    listener: Vec2,
    cfg: &GeomCfg,
) -> Option<Reflection> {
    let wall_intersect = if seg.is_vertical() {
        Vec2::new(seg.a.x, speaker.y)
    } else {
        Vec2::new(speaker.x, seg.a.y)
    };
    let image_source = wall_intersect + (wall_intersect - speaker);
    let ray = Ray::new(image_source, listener - image_source);
    let reflect_pos = ray.segment_intersection(seg, None, cfg)?;
    Some(Reflection {
        wall,
        wall_intersect,
        image_source,
        reflect_pos,
    })
}

/// Reflections off every room wall that produce a usable bounce, in `Wall::ALL` order.
pub fn wall_reflections(
    room: &Boundary,
    speaker: Vec2,
    listener: Vec2,
    cfg: &GeomCfg,
) -> Vec<Reflection> {
    room.walls()
        .filter_map(|(wall, seg)| reflect(wall, seg, speaker, listener, cfg))
        .collect()
}

/// Reflection whose direction from `speaker` is angularly closest to `target_deg`.
///
/// Linear scan; on exact ties the first candidate wins.
pub fn closest_in_direction(
    candidates: &[Reflection],
    speaker: Vec2,
    target_deg: f64,
) -> Option<&Reflection> {
    let mut best: Option<(&Reflection, f64)> = None;
    for r in candidates {
        let d = angle_diff((r.reflect_pos - speaker).angle_deg(), target_deg);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((r, d));
        }
    }
    best.map(|(r, _)| r)
}
