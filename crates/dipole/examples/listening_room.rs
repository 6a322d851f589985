//! Solve a few listening-room scenes and print the layout.
//!
//! Usage:
//!   cargo run -p dipole --example listening_room
//!   cargo run -p dipole --example listening_room -- 12 14 6 3

use dipole::geom2::Vec2;
use dipole::layout::{solve, Channel, Inputs};

fn main() {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let inputs = match args.as_slice() {
        [w, h, x, y] => Inputs::default()
            .with_room(*w, *h)
            .with_listener_position(Vec2::new(*x, *y)),
        _ => Inputs::default(),
    };
    if let Err(err) = inputs.validate() {
        eprintln!("invalid scene: {err}");
        return;
    }
    println!(
        "room {} x {} {}, listener ({:.2}, {:.2}), span {:.0}°",
        inputs.room.x,
        inputs.room.y,
        inputs.unit,
        inputs.listener.position.x,
        inputs.listener.position.y,
        inputs.span_degrees()
    );
    let layout = solve(&inputs);
    let Some(pair) = layout.speakers else {
        println!("no symmetric placement fits these clearances");
        return;
    };
    for ch in [Channel::Left, Channel::Right] {
        let out = pair.get(ch);
        let toe = out
            .toe_in
            .map(|t| format!("{:.1}° toward ({:.2}, {:.2})", t.angle_deg, t.pos.x, t.pos.y))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "{:>5}: ({:.2}, {:.2})  back={}  side={}  toe-in {}",
            ch.name(),
            out.pos.x,
            out.pos.y,
            out.reflections.back.wall,
            out.reflections.side.wall,
            toe
        );
    }
    for (name, check) in layout.checks.entries() {
        let value = check
            .value
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "n/a".to_string());
        let verdict = if check.passed { "ok" } else { "FAIL" };
        println!("{name:>24} {value:>8} {verdict}");
    }
}
