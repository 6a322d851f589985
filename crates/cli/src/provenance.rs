//! `<stem>.provenance.json` sidecars for layouts written with `solve --out`.
//!
//! A sidecar pins down how a layout file was produced: the scene and guideline
//! it was solved for, the solver version and code revision, and caller tags.

use anyhow::{Context, Result};
use dipole::prelude::{Guideline, Inputs};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::scene::{GuidelineFile, SceneFile};

#[derive(Serialize, Debug)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Sidecar contents, serialized field for field.
#[derive(Serialize, Debug)]
pub struct Sidecar {
    pub code_rev: String,
    pub solver_version: &'static str,
    pub callsite: Callsite,
    pub scene: SceneFile,
    pub guideline: GuidelineFile,
    pub tags: Vec<String>,
    pub layout: PathBuf,
}

impl Sidecar {
    /// Record for `layout`, solved from `inputs` under `guideline`.
    #[track_caller]
    pub fn new(inputs: &Inputs, guideline: &Guideline, layout: &Path) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: code_rev(),
            solver_version: dipole::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            scene: SceneFile::from(inputs),
            guideline: GuidelineFile::from(guideline),
            tags: Vec::new(),
            layout: layout.to_path_buf(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Write next to the layout file; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(&self.layout);
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `rooms/den.json` → `rooms/den.provenance.json`.
fn sidecar_path(layout: &Path) -> PathBuf {
    layout.with_extension("provenance.json")
}

/// `GIT_COMMIT` at build time, else at run time, else `unknown`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_layout() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/rooms/den.json")),
            Path::new("/tmp/rooms/den.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("den")),
            Path::new("den.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_scene_and_guideline() {
        let dir = tempdir().unwrap();
        let layout = dir.path().join("layout.json");
        fs::write(&layout, "{}").unwrap();
        let inputs = Inputs::default().with_span_degrees(50.0);
        let strict = Guideline {
            min_area: 300.0,
            ..Guideline::default()
        };
        let path = Sidecar::new(&inputs, &strict, &layout)
            .with_tags(vec!["den".into()])
            .write()
            .unwrap();
        assert!(path.exists());

        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["layout"], layout.to_string_lossy().as_ref());
        assert_eq!(parsed["scene"]["room"][0], 15.0);
        assert!((parsed["scene"]["span_deg"].as_f64().unwrap() - 50.0).abs() < 1e-9);
        assert_eq!(parsed["guideline"]["min_area"], 300.0);
        assert_eq!(parsed["guideline"]["toe_in_window_deg"][1], 30.0);
        assert_eq!(parsed["tags"][0], "den");
        assert_eq!(parsed["solver_version"], dipole::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
    }
}
