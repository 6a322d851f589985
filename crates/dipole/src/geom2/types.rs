//! Basic 2D types and tolerances used by the placement solver.
//!
//! - `Vec2Ext`: angle, cross and rotation helpers on top of `nalgebra::Vector2`.
//! - `Ray`: origin plus (not necessarily unit) direction.
//! - `LineSegment`: ordered endpoints `a → b` of a finite wall.
//! - `GeomCfg`: centralizes the parallel tolerance and the listener-line extent.
//!
//! References
//! - Code cross-refs: `intersect::ray_segment_intersection`, `angles::{angle_diff,normalize_degrees}`

use nalgebra::Vector2;

/// 2D vector in room units. Values are never mutated after construction.
pub type Vec2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// `|(b - a) · perp(d)|` below this counts as parallel (no intersection).
    pub eps_parallel: f64,
    /// Half-length of the segment modelling the listener's facing line.
    pub listener_line_half_len: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-6,
            listener_line_half_len: 100.0,
        }
    }
}

/// Angle and construction helpers missing from `nalgebra::Vector2`.
///
/// Degrees returned by `angle_deg` are exact and lie in (-180, 180]; the rounded
/// flavour is only meant for display.
pub trait Vec2Ext: Sized {
    /// Unit vector at `rad` radians from the +x axis.
    fn from_radians(rad: f64) -> Self;
    /// Unit vector at `deg` degrees from the +x axis.
    fn from_degrees(deg: f64) -> Self;
    /// Scalar 2D cross product `x1*y2 - y1*x2`.
    fn cross2(&self, other: &Self) -> f64;
    fn angle_rad(&self) -> f64;
    fn angle_deg(&self) -> f64;
    /// `angle_deg` rounded half-up to the nearest integer.
    fn angle_deg_rounded(&self) -> f64;
    /// Counterclockwise rotation by `rad` radians (magnitude preserved).
    fn rotated(&self, rad: f64) -> Self;
    /// Component-wise `min` against `bound`.
    fn clamp_to(&self, bound: &Self) -> Self;
    /// Smaller of the two components.
    fn min_component(&self) -> f64;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn from_radians(rad: f64) -> Self {
        Vec2::new(rad.cos(), rad.sin())
    }
    #[inline]
    fn from_degrees(deg: f64) -> Self {
        Self::from_radians(deg.to_radians())
    }
    #[inline]
    fn cross2(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
    #[inline]
    fn angle_rad(&self) -> f64 {
        self.y.atan2(self.x)
    }
    #[inline]
    fn angle_deg(&self) -> f64 {
        self.angle_rad().to_degrees()
    }
    #[inline]
    fn angle_deg_rounded(&self) -> f64 {
        (self.angle_deg() + 0.5).floor()
    }
    #[inline]
    fn rotated(&self, rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
    #[inline]
    fn clamp_to(&self, bound: &Self) -> Self {
        Vec2::new(self.x.min(bound.x), self.y.min(bound.y))
    }
    #[inline]
    fn min_component(&self) -> f64 {
        self.x.min(self.y)
    }
}

/// Half-line `position + t * direction`, `t >= 0`.
///
/// `direction` need not be unit length; distances derived from ray parameters are
/// measured in multiples of the direction's own length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub position: Vec2,
    pub direction: Vec2,
}

impl Ray {
    #[inline]
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
        }
    }
    /// Ray from `position` along the unit vector at `deg` degrees.
    #[inline]
    pub fn from_degrees(position: Vec2, deg: f64) -> Self {
        Self::new(position, Vec2::from_degrees(deg))
    }
    #[inline]
    pub fn with_position(&self, position: Vec2) -> Self {
        Self::new(position, self.direction)
    }
    #[inline]
    pub fn with_direction(&self, direction: Vec2) -> Self {
        Self::new(self.position, direction)
    }
    #[inline]
    pub fn at(&self, t: f64) -> Vec2 {
        self.position + self.direction * t
    }
    /// Finite segment of the ray's supporting line, `half_len` direction-lengths to
    /// either side of `position`.
    pub fn line_segment(&self, half_len: f64) -> LineSegment {
        LineSegment::new(self.at(-half_len), self.at(half_len))
    }
}

/// Finite segment with ordered endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
    /// Constant-x wall (exact comparison; walls are built axis-aligned).
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}
