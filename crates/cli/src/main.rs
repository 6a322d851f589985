use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dipole::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;
mod scene;
mod units;

use scene::SceneArgs;

#[derive(Parser)]
#[command(name = "dipole")]
#[command(about = "Dipole loudspeaker placement for rectangular rooms")]
struct Cmd {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the layout and print it as JSON
    Solve {
        /// Also write the JSON here, with a provenance sidecar next to it
        #[arg(long)]
        out: Option<String>,
        /// Label recorded in the provenance sidecar (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Print every guideline check; fails if any check fails
    Check,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let inputs = cmd.scene.inputs()?;
    inputs.validate().context("invalid scene")?;
    let guideline = cmd.scene.guideline()?;
    match cmd.action {
        Action::Solve { out, tag } => solve_cmd(&inputs, &guideline, out, tag),
        Action::Check => check_cmd(&inputs, &guideline),
    }
}

fn solve_cmd(
    inputs: &Inputs,
    guideline: &Guideline,
    out: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    tracing::info!(
        width = inputs.room.x,
        height = inputs.room.y,
        span_deg = inputs.span_degrees(),
        out = ?out,
        "solve"
    );
    let layout = solve_with(inputs, &GeomCfg::default(), guideline);
    if layout.speakers.is_none() {
        tracing::warn!("no symmetric placement fits the clearances");
    }
    let doc = output::document(inputs, &layout);
    let text = serde_json::to_string_pretty(&doc)?;
    println!("{text}");

    if let Some(out) = out {
        let out_path = Path::new(&out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out_path, &text).with_context(|| format!("writing {out}"))?;
        let sidecar = provenance::Sidecar::new(inputs, guideline, out_path)
            .with_tags(tags)
            .write()?;
        tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    }
    Ok(())
}

fn check_cmd(inputs: &Inputs, guideline: &Guideline) -> Result<()> {
    tracing::info!(
        width = inputs.room.x,
        height = inputs.room.y,
        span_deg = inputs.span_degrees(),
        "check"
    );
    let layout = solve_with(inputs, &GeomCfg::default(), guideline);
    for line in output::check_lines(&layout.checks, inputs.unit) {
        println!("{line}");
    }
    let failed: Vec<&str> = layout
        .checks
        .entries()
        .iter()
        .filter(|(_, c)| !c.passed)
        .map(|(name, _)| *name)
        .collect();
    if !failed.is_empty() {
        bail!("{} check(s) failed: {}", failed.len(), failed.join(", "));
    }
    Ok(())
}
