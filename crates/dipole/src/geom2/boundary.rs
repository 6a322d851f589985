//! Axis-aligned room walls, optionally inset by per-wall clearances.
//!
//! Corners of the inset rectangle for room `W × H` and offsets `o`:
//! `(o.left, o.bottom)`, `(W - o.right, o.bottom)`, `(W - o.right, H - o.top)`,
//! `(o.left, H - o.top)`. Offsets are not clamped here; callers keep each one within
//! `min(W, H) / 2` (see `layout::Inputs::validate`).

use std::fmt;

use super::types::{LineSegment, Vec2};

/// One of the four room walls. `ALL` is the canonical probe order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Right,
    Bottom,
    Left,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Right, Wall::Bottom, Wall::Left];

    /// Unit normal of the wall's face that looks into the room.
    #[inline]
    pub fn inward_normal(self) -> Vec2 {
        match self {
            Wall::Top => Vec2::new(0.0, -1.0),
            Wall::Right => Vec2::new(-1.0, 0.0),
            Wall::Bottom => Vec2::new(0.0, 1.0),
            Wall::Left => Vec2::new(1.0, 0.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Wall::Top => "top",
            Wall::Right => "right",
            Wall::Bottom => "bottom",
            Wall::Left => "left",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum clearance between speakers and each wall, in room units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallOffsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl WallOffsets {
    #[inline]
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
    #[inline]
    pub fn get(&self, wall: Wall) -> f64 {
        match wall {
            Wall::Top => self.top,
            Wall::Right => self.right,
            Wall::Bottom => self.bottom,
            Wall::Left => self.left,
        }
    }
    /// Copy with `wall` set to `v`.
    pub fn with(&self, wall: Wall, v: f64) -> Self {
        let mut out = *self;
        match wall {
            Wall::Top => out.top = v,
            Wall::Right => out.right = v,
            Wall::Bottom => out.bottom = v,
            Wall::Left => out.left = v,
        }
        out
    }
    /// Copy with every offset passed through `f`.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

/// Four axis-aligned walls: top/bottom horizontal, left/right vertical.
///
/// Endpoint order: top `tl → tr`, right `tr → br`, bottom `bl → br`, left `tl → bl`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub top: LineSegment,
    pub right: LineSegment,
    pub bottom: LineSegment,
    pub left: LineSegment,
}

impl Boundary {
    /// Walls of the rectangle `[0, room.x] × [0, room.y]` shrunk by `offsets`.
    pub fn inset(room: Vec2, offsets: &WallOffsets) -> Self {
        let bl = Vec2::new(offsets.left, offsets.bottom);
        let br = Vec2::new(room.x - offsets.right, offsets.bottom);
        let tr = Vec2::new(room.x - offsets.right, room.y - offsets.top);
        let tl = Vec2::new(offsets.left, room.y - offsets.top);
        Self {
            top: LineSegment::new(tl, tr),
            right: LineSegment::new(tr, br),
            bottom: LineSegment::new(bl, br),
            left: LineSegment::new(tl, bl),
        }
    }

    /// The room's own walls (no clearance).
    #[inline]
    pub fn room(room: Vec2) -> Self {
        Self::inset(room, &WallOffsets::default())
    }

    #[inline]
    pub fn get(&self, wall: Wall) -> &LineSegment {
        match wall {
            Wall::Top => &self.top,
            Wall::Right => &self.right,
            Wall::Bottom => &self.bottom,
            Wall::Left => &self.left,
        }
    }

    /// Walls in `Wall::ALL` order.
    pub fn walls(&self) -> impl Iterator<Item = (Wall, &LineSegment)> + '_ {
        Wall::ALL.into_iter().map(move |w| (w, self.get(w)))
    }

    /// Corners as `[bl, br, tr, tl]`.
    pub fn corners(&self) -> [Vec2; 4] {
        [self.bottom.a, self.bottom.b, self.top.b, self.top.a]
    }
}
