//! Headless session driven by the greedy autopilot.
//!
//! Prints one JSON object per logical tick to stdout:
//! `{"snapshot": {...}, "events": [...]}`. Useful for scripting and for
//! reproducing a seeded game without a terminal.
//!
//! ```text
//! autoplay [--seed N] [--ticks N] [--speed MS]
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

use snake_tui::autopilot::choose_direction;
use snake_tui::config::AppConfig;
use snake_tui::core::{GameSnapshot, GameState};
use snake_tui::logging;
use snake_tui::types::{GameConfig, GameEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AutoplayArgs {
    seed: u32,
    max_ticks: u32,
    speed_ms: Option<u32>,
}

#[derive(Serialize)]
struct TickRecord<'a> {
    snapshot: &'a GameSnapshot,
    events: &'a [GameEvent],
}

fn parse_args(args: &[String]) -> Result<AutoplayArgs> {
    let mut out = AutoplayArgs {
        seed: 1,
        max_ticks: 10_000,
        speed_ms: None,
    };
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let v = args
            .get(i)
            .ok_or_else(|| anyhow!("autoplay: missing value for {}", flag))?;
        let n = v
            .parse::<u32>()
            .map_err(|_| anyhow!("autoplay: invalid {} value: {}", flag, v))?;
        match flag {
            "--seed" => out.seed = n,
            "--ticks" => out.max_ticks = n,
            "--speed" => out.speed_ms = Some(n),
            other => return Err(anyhow!("autoplay: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    logging::init(&AppConfig::from_env())?;

    let mut config = GameConfig::default();
    if let Some(ms) = args.speed_ms {
        config = config.with_initial_speed(ms);
    }
    let mut game = GameState::new(config, args.seed);
    game.start();
    info!(seed = args.seed, max_ticks = args.max_ticks, "autoplay started");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut snap = GameSnapshot::default();
    let mut events = Vec::new();

    for _ in 0..args.max_ticks {
        if let Some(dir) = choose_direction(&game) {
            game.request_direction_change(dir);
        }
        game.advance();
        events.clear();
        events.extend(game.drain_events());
        game.snapshot_into(&mut snap);

        let record = TickRecord {
            snapshot: &snap,
            events: &events,
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;

        if game.game_over() {
            break;
        }
    }
    out.flush()?;

    info!(
        score = game.score(),
        level = game.level(),
        ticks = game.tick(),
        "autoplay finished"
    );
    Ok(())
}
