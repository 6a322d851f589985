//! Scene and guideline sources for the CLI: command-line flags, optionally
//! overridden by JSON files.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use dipole::prelude::*;
use serde::{Deserialize, Serialize};

/// Scene flags. Defaults reproduce `Inputs::default()`.
#[derive(Args, Debug, Clone)]
pub struct SceneArgs {
    /// Room width (x extent)
    #[arg(long, default_value_t = 15.0)]
    pub width: f64,
    /// Room height (y extent)
    #[arg(long, default_value_t = 17.0)]
    pub height: f64,
    #[arg(long, default_value_t = 8.0)]
    pub listener_x: f64,
    #[arg(long, default_value_t = 2.0)]
    pub listener_y: f64,
    /// Listener facing direction, degrees counterclockwise from +x
    #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
    pub facing_deg: f64,
    /// Angle between the two speakers as seen from the listener, degrees
    #[arg(long, default_value_t = 60.0)]
    pub span_deg: f64,
    /// Clearance applied to every wall
    #[arg(long, default_value_t = 2.0)]
    pub offset: f64,
    /// Display unit: ft or m
    #[arg(long, default_value = "ft")]
    pub unit: String,
    /// JSON scene file; any field it sets overrides the flags
    #[arg(long)]
    pub scene: Option<String>,
    /// JSON guideline file overriding the default thresholds
    #[arg(long)]
    pub guideline: Option<String>,
}

/// Scene as read from or written to JSON. Every field is optional on input.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneFile {
    pub unit: Option<String>,
    pub room: Option<[f64; 2]>,
    pub listener: Option<[f64; 2]>,
    pub facing_deg: Option<f64>,
    pub span_deg: Option<f64>,
    pub offsets: Option<OffsetsFile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OffsetsFile {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl From<OffsetsFile> for WallOffsets {
    fn from(o: OffsetsFile) -> Self {
        WallOffsets {
            top: o.top,
            right: o.right,
            bottom: o.bottom,
            left: o.left,
        }
    }
}

impl From<&WallOffsets> for OffsetsFile {
    fn from(o: &WallOffsets) -> Self {
        OffsetsFile {
            top: o.top,
            right: o.right,
            bottom: o.bottom,
            left: o.left,
        }
    }
}

impl From<&Inputs> for SceneFile {
    fn from(inputs: &Inputs) -> Self {
        let p = inputs.listener.position;
        SceneFile {
            unit: Some(inputs.unit.tag().to_string()),
            room: Some([inputs.room.x, inputs.room.y]),
            listener: Some([p.x, p.y]),
            facing_deg: Some(inputs.listener.direction.angle_deg()),
            span_deg: Some(inputs.span_degrees()),
            offsets: Some(OffsetsFile::from(&inputs.offsets)),
        }
    }
}

/// Partial guideline; unset thresholds keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuidelineFile {
    pub min_area: Option<f64>,
    pub min_speaker_separation: Option<f64>,
    pub listening_distance: Option<[f64; 2]>,
    pub min_back_wall_offset: Option<f64>,
    pub min_side_wall_offset: Option<f64>,
    pub toe_in_window_deg: Option<[f64; 2]>,
}

impl From<&Guideline> for GuidelineFile {
    fn from(g: &Guideline) -> Self {
        let (near, far) = g.listening_distance;
        let (lo, hi) = g.toe_in_window_deg;
        GuidelineFile {
            min_area: Some(g.min_area),
            min_speaker_separation: Some(g.min_speaker_separation),
            listening_distance: Some([near, far]),
            min_back_wall_offset: Some(g.min_back_wall_offset),
            min_side_wall_offset: Some(g.min_side_wall_offset),
            toe_in_window_deg: Some([lo, hi]),
        }
    }
}

impl GuidelineFile {
    pub fn apply(&self, base: Guideline) -> Guideline {
        Guideline {
            min_area: self.min_area.unwrap_or(base.min_area),
            min_speaker_separation: self
                .min_speaker_separation
                .unwrap_or(base.min_speaker_separation),
            listening_distance: self
                .listening_distance
                .map(|[lo, hi]| (lo, hi))
                .unwrap_or(base.listening_distance),
            min_back_wall_offset: self.min_back_wall_offset.unwrap_or(base.min_back_wall_offset),
            min_side_wall_offset: self.min_side_wall_offset.unwrap_or(base.min_side_wall_offset),
            toe_in_window_deg: self
                .toe_in_window_deg
                .map(|[lo, hi]| (lo, hi))
                .unwrap_or(base.toe_in_window_deg),
        }
    }
}

fn parse_unit(tag: &str) -> Result<Unit> {
    Unit::parse(tag).ok_or_else(|| anyhow!("unknown unit {tag:?} (expected ft or m)"))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    let bytes = fs::read(Path::new(path)).with_context(|| format!("reading {path}"))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))
}

impl SceneFile {
    /// Overlay this file on `base`. Fields are assigned directly, without the
    /// clamping the interactive updates apply, so `validate` sees what was written.
    pub fn apply(&self, base: Inputs) -> Result<Inputs> {
        let mut inputs = base;
        if let Some(tag) = &self.unit {
            inputs.unit = parse_unit(tag)?;
        }
        if let Some([w, h]) = self.room {
            inputs.room = Vec2::new(w, h);
        }
        if let Some([x, y]) = self.listener {
            inputs.listener = inputs.listener.with_position(Vec2::new(x, y));
        }
        if let Some(deg) = self.facing_deg {
            inputs.listener = inputs.listener.with_direction(Vec2::from_degrees(deg));
        }
        if let Some(deg) = self.span_deg {
            inputs.span = deg.to_radians();
        }
        if let Some(o) = self.offsets {
            inputs.offsets = o.into();
        }
        Ok(inputs)
    }
}

impl SceneArgs {
    /// Build the scene from flags, then the optional scene file.
    pub fn inputs(&self) -> Result<Inputs> {
        let flags = Inputs {
            unit: parse_unit(&self.unit)?,
            room: Vec2::new(self.width, self.height),
            listener: Ray::from_degrees(Vec2::new(self.listener_x, self.listener_y), self.facing_deg),
            span: self.span_deg.to_radians(),
            offsets: WallOffsets::uniform(self.offset),
        };
        match &self.scene {
            Some(path) => read_json::<SceneFile>(path)?.apply(flags),
            None => Ok(flags),
        }
    }

    pub fn guideline(&self) -> Result<Guideline> {
        match &self.guideline {
            Some(path) => Ok(read_json::<GuidelineFile>(path)?.apply(Guideline::default())),
            None => Ok(Guideline::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        scene: SceneArgs,
    }

    #[test]
    fn default_flags_match_default_inputs() {
        let h = Harness::parse_from(["t"]);
        let inputs = h.scene.inputs().unwrap();
        let d = Inputs::default();
        assert_eq!(inputs.room, d.room);
        assert_eq!(inputs.listener.position, d.listener.position);
        assert!((inputs.listener.direction - d.listener.direction).norm() < 1e-12);
        assert!((inputs.span - d.span).abs() < 1e-12);
        assert_eq!(inputs.offsets, d.offsets);
        assert_eq!(h.scene.guideline().unwrap(), Guideline::default());
    }

    #[test]
    fn scene_file_overrides_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(
            &path,
            r#"{"room": [20, 12], "span_deg": 45, "unit": "m",
                "offsets": {"top": 1, "right": 0.5, "bottom": 0, "left": 0.5}}"#,
        )
        .unwrap();
        let h = Harness::parse_from([
            "t",
            "--listener-x",
            "5",
            "--scene",
            path.to_str().unwrap(),
        ]);
        let inputs = h.scene.inputs().unwrap();
        assert_eq!(inputs.room, Vec2::new(20.0, 12.0));
        assert_eq!(inputs.listener.position, Vec2::new(5.0, 2.0));
        assert_eq!(inputs.unit, Unit::Meters);
        assert!((inputs.span_degrees() - 45.0).abs() < 1e-9);
        assert_eq!(inputs.offsets.right, 0.5);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn unknown_scene_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(&path, r#"{"rooom": [20, 12]}"#).unwrap();
        let h = Harness::parse_from(["t", "--scene", path.to_str().unwrap()]);
        assert!(h.scene.inputs().is_err());
    }

    #[test]
    fn bad_unit_is_an_error() {
        let h = Harness::parse_from(["t", "--unit", "yd"]);
        assert!(h.scene.inputs().is_err());
    }

    #[test]
    fn guideline_file_is_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.json");
        fs::write(&path, r#"{"min_area": 300, "toe_in_window_deg": [0, 20]}"#).unwrap();
        let h = Harness::parse_from(["t", "--guideline", path.to_str().unwrap()]);
        let g = h.scene.guideline().unwrap();
        assert_eq!(g.min_area, 300.0);
        assert_eq!(g.toe_in_window_deg, (0.0, 20.0));
        assert_eq!(g.min_side_wall_offset, 2.0);
        assert_eq!(GuidelineFile::from(&g).apply(Guideline::default()), g);
    }

    #[test]
    fn scene_file_round_trips_default_inputs() {
        let d = Inputs::default();
        let file = SceneFile::from(&d);
        let back = file.apply(Inputs::default().with_room(30.0, 30.0)).unwrap();
        assert_eq!(back.room, d.room);
        assert_eq!(back.offsets, d.offsets);
        assert!((back.span - d.span).abs() < 1e-12);
    }
}
