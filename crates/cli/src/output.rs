//! JSON rendering of solved layouts.

use dipole::layout::{Reflection, SpeakerOutput};
use dipole::prelude::*;
use serde_json::{json, Value};

use crate::scene::SceneFile;
use crate::units::Formatter;

fn point(v: Vec2) -> Value {
    json!([v.x, v.y])
}

fn reflection(r: &Reflection) -> Value {
    json!({
        "wall": r.wall.name(),
        "wall_intersect": point(r.wall_intersect),
        "image_source": point(r.image_source),
        "reflect_pos": point(r.reflect_pos),
    })
}

fn speaker(out: &SpeakerOutput) -> Value {
    json!({
        "pos": point(out.pos),
        "direction_deg": out.direction.angle_deg(),
        "toe_in": out.toe_in.map(|t| json!({
            "pos": point(t.pos),
            "angle_deg": t.angle_deg,
        })),
        "reflections": {
            "back": reflection(&out.reflections.back),
            "side": reflection(&out.reflections.side),
        },
    })
}

/// Check value formatted for `fmt`'s unit; `N/A` when nothing was measured.
fn display_value(fmt: &Formatter, name: &str, value: Option<f64>) -> String {
    match value {
        Some(v) if name == "area" => fmt.area(v),
        Some(v) => fmt.distance(v),
        None => "N/A".to_string(),
    }
}

/// Raw values stay in feet; `display` carries the unit-converted text.
pub fn checks(c: &Checks, unit: Unit) -> Value {
    let fmt = Formatter::new(unit);
    let entries: serde_json::Map<String, Value> = c
        .entries()
        .iter()
        .map(|(name, check)| {
            (
                name.to_string(),
                json!({
                    "passed": check.passed,
                    "value": check.value,
                    "display": display_value(&fmt, name, check.value),
                }),
            )
        })
        .collect();
    Value::Object(entries)
}

/// `{inputs, layout, checks}` document printed by `solve`.
pub fn document(inputs: &Inputs, layout: &Layout) -> Value {
    let speakers = layout.speakers.as_ref().map(|pair| {
        json!({
            "left": speaker(&pair.left),
            "right": speaker(&pair.right),
        })
    });
    json!({
        "inputs": SceneFile::from(inputs),
        "layout": speakers,
        "checks": checks(&layout.checks, inputs.unit),
        "all_passed": layout.checks.all_passed(),
    })
}

/// One `name value PASS/FAIL` line per check.
pub fn check_lines(c: &Checks, unit: Unit) -> Vec<String> {
    let fmt = Formatter::new(unit);
    c.entries()
        .iter()
        .map(|(name, check)| {
            let value = display_value(&fmt, name, check.value);
            let verdict = if check.passed { "PASS" } else { "FAIL" };
            format!("{name:<24} {value:>12} {verdict}")
        })
        .collect()
}
