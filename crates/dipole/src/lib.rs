//! Dipole loudspeaker placement for rectangular rooms.
//!
//! Given a listener position and facing, a desired speaker span and minimum
//! wall clearances, compute a mirror-symmetric speaker pair, its first-order
//! wall reflections and toe-in, and score the result against a placement
//! guideline. Everything is a pure function of an `Inputs` snapshot.
//!
//! Modules
//! - `geom2`: vectors, rays, wall segments, ray–segment intersection, boundaries.
//! - `layout`: inputs, placement, reflections, toe-in, the `solve` pipeline.
//! - `checks`: guideline thresholds and scoring.
//!
//! API Policy
//! - `api` and `prelude` are the intended entry points; module internals may
//!   change without notice.

pub mod api;
pub mod checks;
pub mod geom2;
pub mod layout;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Vec2, Vec2Ext};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::checks::{Check, Checks, Guideline};
    pub use crate::geom2::{Boundary, GeomCfg, LineSegment, Ray, Vec2, Vec2Ext, Wall, WallOffsets};
    pub use crate::layout::{
        solve, solve_checked, solve_with, Channel, InputError, Inputs, Layout, LayoutCache,
        SpeakerOutput, SpeakerPair, Unit,
    };
}
