//! Scene snapshot consumed by the solver, plus value-returning updates.
//!
//! The update methods mirror what an interactive front-end does on each edit:
//! the listener is kept inside the room and wall offsets never exceed half the
//! smaller room dimension. `validate` reports anything the updates cannot repair.

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

use crate::geom2::{Ray, Vec2, Vec2Ext, Wall, WallOffsets};

/// Display unit tag. The solver always works in one linear unit; this only
/// tells the caller how to format results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Feet,
    Meters,
}

impl Unit {
    pub fn parse(tag: &str) -> Option<Unit> {
        match tag {
            "ft" | "feet" => Some(Unit::Feet),
            "m" | "meters" => Some(Unit::Meters),
            _ => None,
        }
    }
    pub fn tag(self) -> &'static str {
        match self {
            Unit::Feet => "ft",
            Unit::Meters => "m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Caller misuse detected by [`Inputs::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("room dimensions must be positive (got {width} x {height})")]
    NonPositiveRoom { width: f64, height: f64 },
    #[error("{wall} wall offset must be non-negative (got {value})")]
    NegativeOffset { wall: Wall, value: f64 },
    #[error("{wall} wall offset {value} exceeds half the smaller room dimension ({max})")]
    OffsetTooLarge { wall: Wall, value: f64, max: f64 },
    #[error("listener ({x}, {y}) lies outside the room")]
    ListenerOutsideRoom { x: f64, y: f64 },
    #[error("speaker span must lie strictly between 0 and 180 degrees (got {span_deg})")]
    SpanOutOfRange { span_deg: f64 },
    #[error("listener facing direction has zero length")]
    DegenerateFacing,
}

/// Immutable scene snapshot: room, listener, span and clearances.
///
/// Invariants (checked by `validate`, assumed by `layout::solve`):
/// - `room.x, room.y > 0`; listener position within `[0, room]`.
/// - `listener.direction` is a unit vector; `span ∈ (0, π)` radians.
/// - each offset in `[0, min(room.x, room.y) / 2]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Inputs {
    pub unit: Unit,
    pub room: Vec2,
    pub listener: Ray,
    /// Speaker angular span in radians.
    pub span: f64,
    pub offsets: WallOffsets,
}

impl Default for Inputs {
    /// 15 × 17 ft room, listener at (8, 2) facing +y, 60° span, 2 ft clearances.
    fn default() -> Self {
        Self {
            unit: Unit::Feet,
            room: Vec2::new(15.0, 17.0),
            listener: Ray::from_degrees(Vec2::new(8.0, 2.0), 90.0),
            span: 60f64.to_radians(),
            offsets: WallOffsets::uniform(2.0),
        }
    }
}

impl Inputs {
    /// Largest admissible wall offset for the current room.
    #[inline]
    pub fn max_wall_offset(&self) -> f64 {
        self.room.min_component() / 2.0
    }

    pub fn span_degrees(&self) -> f64 {
        self.span.to_degrees()
    }

    pub fn with_unit(&self, unit: Unit) -> Self {
        Self {
            unit,
            ..self.clone()
        }
    }

    /// Listener moved to `p`, clamped component-wise to the room size.
    pub fn with_listener_position(&self, p: Vec2) -> Self {
        Self {
            listener: self.listener.with_position(p.clamp_to(&self.room)),
            ..self.clone()
        }
    }

    pub fn with_facing_degrees(&self, deg: f64) -> Self {
        Self {
            listener: self.listener.with_direction(Vec2::from_degrees(deg)),
            ..self.clone()
        }
    }

    pub fn with_span_degrees(&self, deg: f64) -> Self {
        Self {
            span: deg.to_radians(),
            ..self.clone()
        }
    }

    /// New room size; the listener and every offset are pulled back within range.
    pub fn with_room(&self, width: f64, height: f64) -> Self {
        let room = Vec2::new(width, height);
        let max = room.min_component() / 2.0;
        Self {
            room,
            listener: self
                .listener
                .with_position(self.listener.position.clamp_to(&room)),
            offsets: self.offsets.map(|v| v.min(max)),
            ..self.clone()
        }
    }

    /// `wall` offset set to `value`, clamped to `max_wall_offset`.
    pub fn with_wall_offset(&self, wall: Wall, value: f64) -> Self {
        Self {
            offsets: self.offsets.with(wall, value.min(self.max_wall_offset())),
            ..self.clone()
        }
    }

    /// Check the invariants listed on the type.
    pub fn validate(&self) -> Result<(), InputError> {
        let finite = |v: Vec2| v.x.is_finite() && v.y.is_finite();
        if !finite(self.room) {
            return Err(InputError::NonFinite { field: "room" });
        }
        if !finite(self.listener.position) {
            return Err(InputError::NonFinite {
                field: "listener position",
            });
        }
        if !finite(self.listener.direction) {
            return Err(InputError::NonFinite {
                field: "listener direction",
            });
        }
        if !self.span.is_finite() {
            return Err(InputError::NonFinite { field: "span" });
        }
        if self.room.x <= 0.0 || self.room.y <= 0.0 {
            return Err(InputError::NonPositiveRoom {
                width: self.room.x,
                height: self.room.y,
            });
        }
        let max = self.max_wall_offset();
        for wall in Wall::ALL {
            let value = self.offsets.get(wall);
            if !value.is_finite() {
                return Err(InputError::NonFinite {
                    field: "wall offset",
                });
            }
            if value < 0.0 {
                return Err(InputError::NegativeOffset { wall, value });
            }
            if value > max {
                return Err(InputError::OffsetTooLarge { wall, value, max });
            }
        }
        let p = self.listener.position;
        if p.x < 0.0 || p.y < 0.0 || p.x > self.room.x || p.y > self.room.y {
            return Err(InputError::ListenerOutsideRoom { x: p.x, y: p.y });
        }
        if self.listener.direction.norm() == 0.0 {
            return Err(InputError::DegenerateFacing);
        }
        if self.span <= 0.0 || self.span >= PI {
            return Err(InputError::SpanOutOfRange {
                span_deg: self.span_degrees(),
            });
        }
        Ok(())
    }
}
