//! Placement guideline checks over a solved layout.
//!
//! Each quantity is reported as a [`Check`]: the measured value (absent when
//! there is nothing to measure) and whether it meets the [`Guideline`]. The
//! default guideline carries the thresholds published for dipole loudspeakers;
//! they are configuration, not geometry, so callers may pass their own.

use crate::geom2::Vec2;
use crate::layout::{Channel, Inputs, SpeakerOutput, SpeakerPair};

/// Guideline thresholds, in room units (area in units²).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guideline {
    pub min_area: f64,
    pub min_speaker_separation: f64,
    /// Inclusive `[min, max]` listener-to-speaker distance.
    pub listening_distance: (f64, f64),
    pub min_back_wall_offset: f64,
    pub min_side_wall_offset: f64,
    /// Exclusive `(min, max)` window for an acceptable toe-in angle, degrees.
    pub toe_in_window_deg: (f64, f64),
}

impl Default for Guideline {
    fn default() -> Self {
        Self {
            min_area: 240.0,
            min_speaker_separation: 8.0,
            listening_distance: (8.0, 18.0),
            min_back_wall_offset: 4.0,
            min_side_wall_offset: 2.0,
            toe_in_window_deg: (0.0, 30.0),
        }
    }
}

impl Guideline {
    #[inline]
    pub fn area_ok(&self, area: f64) -> bool {
        area >= self.min_area
    }
    #[inline]
    pub fn separation_ok(&self, d: f64) -> bool {
        d >= self.min_speaker_separation
    }
    #[inline]
    pub fn listening_distance_ok(&self, d: f64) -> bool {
        let (lo, hi) = self.listening_distance;
        d >= lo && d <= hi
    }
    #[inline]
    pub fn back_wall_ok(&self, d: f64) -> bool {
        d >= self.min_back_wall_offset
    }
    #[inline]
    pub fn side_wall_ok(&self, d: f64) -> bool {
        d >= self.min_side_wall_offset
    }
    #[inline]
    pub fn toe_in_ok(&self, deg: f64) -> bool {
        let (lo, hi) = self.toe_in_window_deg;
        deg > lo && deg < hi
    }
}

/// One scored quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Check {
    pub passed: bool,
    pub value: Option<f64>,
}

impl Check {
    /// Nothing to measure (no valid layout).
    #[inline]
    pub fn absent() -> Self {
        Self {
            passed: false,
            value: None,
        }
    }
    #[inline]
    pub fn measured(value: f64, passed: bool) -> Self {
        Self {
            passed,
            value: Some(value),
        }
    }
}

/// Per-channel checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelChecks {
    /// Informational: always passes while a layout exists; value absent without toe-in.
    pub toe_in_distance: Check,
    pub back_wall_offset: Check,
    pub side_wall_offset: Check,
}

impl ChannelChecks {
    fn absent() -> Self {
        Self {
            toe_in_distance: Check::absent(),
            back_wall_offset: Check::absent(),
            side_wall_offset: Check::absent(),
        }
    }
}

/// Every check for one layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checks {
    pub left: ChannelChecks,
    pub right: ChannelChecks,
    pub area: Check,
    pub speaker_separation: Check,
    pub listening_distance: Check,
}

impl Checks {
    /// All entries absent and failing.
    pub fn absent() -> Self {
        Self {
            left: ChannelChecks::absent(),
            right: ChannelChecks::absent(),
            area: Check::absent(),
            speaker_separation: Check::absent(),
            listening_distance: Check::absent(),
        }
    }

    pub fn channel(&self, channel: Channel) -> &ChannelChecks {
        match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        }
    }

    /// `(name, check)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, Check); 9] {
        [
            ("area", self.area),
            ("speaker_separation", self.speaker_separation),
            ("listening_distance", self.listening_distance),
            ("left.toe_in_distance", self.left.toe_in_distance),
            ("left.back_wall_offset", self.left.back_wall_offset),
            ("left.side_wall_offset", self.left.side_wall_offset),
            ("right.toe_in_distance", self.right.toe_in_distance),
            ("right.back_wall_offset", self.right.back_wall_offset),
            ("right.side_wall_offset", self.right.side_wall_offset),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.entries().iter().all(|(_, c)| c.passed)
    }
}

/// Score `speakers` against the default guideline.
pub fn check(inputs: &Inputs, speakers: Option<&SpeakerPair>) -> Checks {
    check_with(inputs, speakers, &Guideline::default())
}

pub fn check_with(inputs: &Inputs, speakers: Option<&SpeakerPair>, g: &Guideline) -> Checks {
    let Some(pair) = speakers else {
        return Checks::absent();
    };
    let listener = inputs.listener.position;
    let area = inputs.room.x * inputs.room.y;
    let separation = (pair.left.pos - pair.right.pos).norm();
    let listening = (pair.left.pos - listener).norm();
    Checks {
        left: channel_checks(&pair.left, listener, g),
        right: channel_checks(&pair.right, listener, g),
        area: Check::measured(area, g.area_ok(area)),
        speaker_separation: Check::measured(separation, g.separation_ok(separation)),
        listening_distance: Check::measured(listening, g.listening_distance_ok(listening)),
    }
}

fn channel_checks(out: &SpeakerOutput, listener: Vec2, g: &Guideline) -> ChannelChecks {
    let back = (out.reflections.back.wall_intersect - out.pos).norm();
    let side = (out.reflections.side.wall_intersect - out.pos).norm();
    ChannelChecks {
        toe_in_distance: Check {
            passed: true,
            value: out.toe_in.map(|t| (listener - t.pos).norm()),
        },
        back_wall_offset: Check::measured(back, g.back_wall_ok(back)),
        side_wall_offset: Check::measured(side, g.side_wall_ok(side)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Wall;
    use crate::layout::{Reflection, Reflections, ToeIn};
    use nalgebra::vector;

    fn reflection(wall: Wall, wall_intersect: Vec2) -> Reflection {
        Reflection {
            wall,
            wall_intersect,
            image_source: wall_intersect,
            reflect_pos: wall_intersect,
        }
    }

    fn pair() -> SpeakerPair {
        let left = SpeakerOutput {
            pos: vector![3.0, 10.0],
            direction: vector![-0.5, 0.8],
            toe_in: None,
            reflections: Reflections {
                back: reflection(Wall::Top, vector![3.0, 17.0]),
                side: reflection(Wall::Left, vector![0.0, 10.0]),
            },
        };
        let right = SpeakerOutput {
            pos: vector![13.0, 10.0],
            direction: vector![0.5, 0.8],
            toe_in: Some(ToeIn {
                pos: vector![8.0, 5.0],
                angle_deg: 14.0,
            }),
            reflections: Reflections {
                back: reflection(Wall::Top, vector![13.0, 12.0]),
                side: reflection(Wall::Right, vector![15.0, 10.0]),
            },
        };
        SpeakerPair { left, right }
    }

    #[test]
    fn area_threshold() {
        let g = Guideline::default();
        assert!(g.area_ok(15.0 * 17.0));
        assert!(g.area_ok(240.0));
        assert!(!g.area_ok(10.0 * 10.0));
    }

    #[test]
    fn listening_distance_bounds_are_inclusive() {
        let g = Guideline::default();
        assert!(g.listening_distance_ok(8.0));
        assert!(g.listening_distance_ok(18.0));
        assert!(!g.listening_distance_ok(7.99));
        assert!(!g.listening_distance_ok(18.01));
    }

    #[test]
    fn toe_in_window_is_open() {
        let g = Guideline::default();
        assert!(!g.toe_in_ok(0.0));
        assert!(g.toe_in_ok(0.5));
        assert!(g.toe_in_ok(29.9));
        assert!(!g.toe_in_ok(30.0));
    }

    #[test]
    fn scores_a_pair() {
        let inputs = Inputs::default();
        let c = check(&inputs, Some(&pair()));
        assert_eq!(c.area, Check::measured(255.0, true));
        assert_eq!(c.speaker_separation, Check::measured(10.0, true));
        let ld = c.listening_distance.value.unwrap();
        assert!((ld - (25.0f64 + 64.0).sqrt()).abs() < 1e-12);
        assert!(c.listening_distance.passed);

        assert_eq!(c.left.back_wall_offset, Check::measured(7.0, true));
        assert_eq!(c.left.side_wall_offset, Check::measured(3.0, true));
        assert_eq!(c.right.back_wall_offset, Check::measured(2.0, false));
        assert_eq!(c.right.side_wall_offset, Check::measured(2.0, true));

        // Toe-in distance is informational.
        assert_eq!(c.left.toe_in_distance, Check { passed: true, value: None });
        assert_eq!(c.right.toe_in_distance, Check::measured(3.0, true));
        assert!(!c.all_passed());
        assert_eq!(c.channel(Channel::Right).back_wall_offset.value, Some(2.0));
    }

    #[test]
    fn missing_pair_fails_everything() {
        let small = Inputs::default().with_room(10.0, 10.0);
        let c = check(&small, None);
        assert_eq!(c, Checks::absent());
        for (name, entry) in c.entries() {
            assert!(!entry.passed, "{name} should fail");
            assert!(entry.value.is_none(), "{name} should be absent");
        }
    }

    #[test]
    fn custom_guideline_changes_verdicts() {
        let strict = Guideline {
            min_area: 300.0,
            ..Guideline::default()
        };
        let c = check_with(&Inputs::default(), Some(&pair()), &strict);
        assert_eq!(c.area, Check::measured(255.0, false));
    }
}
