//! Strict 2D geometry for rectangular rooms.
//!
//! Purpose
//! - Provide the immutable vector helpers, rays and wall segments the placement
//!   solver is built from, with tolerances kept explicit in `GeomCfg`.
//! - Keep the API minimal: one intersector, one boundary builder, two angle helpers.
//!
//! References
//! - Code cross-refs: `Vec2Ext`, `Ray`, `LineSegment`, `Boundary`, `ray_segment_intersection`

mod angles;
mod boundary;
mod intersect;
mod types;

pub use angles::{angle_diff, normalize_degrees};
pub use boundary::{Boundary, Wall, WallOffsets};
pub use intersect::ray_segment_intersection;
pub use types::{GeomCfg, LineSegment, Ray, Vec2, Vec2Ext};

#[cfg(test)]
mod tests;
