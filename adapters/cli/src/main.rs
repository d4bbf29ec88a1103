#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Iveria experience.

mod dump;
mod script;
mod settings;

use std::{
    io::{self, Write},
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use clap::Parser;
use iveria_core::{Command, Vec2};
use iveria_system_controls::Controls;
use iveria_world::{self as world, World};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::Overrides;

/// Generate a dungeon map, replay scripted intents, and print the result.
#[derive(Debug, Parser)]
#[command(name = "iveria", version)]
struct Args {
    /// Seed for the first map; defaults to the wall clock in microseconds.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file holding generation settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of tile columns, overriding the config file.
    #[arg(long)]
    width: Option<u32>,
    /// Number of tile rows, overriding the config file.
    #[arg(long)]
    height: Option<u32>,
    /// Maximum number of room separation passes.
    #[arg(long)]
    max_passes: Option<u32>,
    /// Starting player position as `X,Y`; defaults to the first open cell of
    /// the initial map.
    #[arg(long, value_parser = parse_position)]
    start: Option<Vec2>,
    /// Intents to replay: U/D/L/R steps and G to regenerate.
    #[arg(long, default_value = "")]
    script: String,
    /// Draw each glyph in its tile colour using ANSI escape codes.
    #[arg(long)]
    color: bool,
}

/// Entry point for the Iveria command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = settings::load(
        args.config.as_deref(),
        Overrides {
            width: args.width,
            height: args.height,
            max_passes: args.max_passes,
        },
    )?;
    let inputs = script::parse(&args.script).context("invalid intent script")?;
    let seed = args.seed.unwrap_or_else(wall_clock_seed);

    let mut world =
        World::with_config(config, Vec2::ZERO).context("invalid generation configuration")?;
    let configured = world::query::config(&world);
    tracing::debug!(
        width = configured.width,
        height = configured.height,
        max_passes = configured.max_separation_passes,
        "world configured"
    );

    let mut controls = Controls::new(seed);
    let mut commands = Vec::new();
    controls.start(&mut commands);
    let mut events = Vec::new();
    for command in commands.drain(..) {
        world::apply(&mut world, command, &mut events);
    }

    let start = args
        .start
        .or_else(|| world::query::tile_grid(&world).first_open_cell());
    if let Some(position) = start {
        world::apply(&mut world, Command::PlacePlayer { position }, &mut events);
    }

    for input in inputs {
        controls.handle(input, &mut commands);
    }
    for command in commands {
        world::apply(&mut world, command, &mut events);
    }
    tracing::debug!(
        events = events.len(),
        maps = controls.seeds().issued(),
        "replayed intents"
    );

    if args.color {
        let encoded = dump::render_colored(&world).context("failed to encode coloured map")?;
        io::stdout()
            .write_all(&encoded)
            .context("failed to write map")?;
    } else {
        print!("{}", dump::render(&world));
    }
    println!("{}", dump::status_line(&world, &events));
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn parse_position(value: &str) -> Result<Vec2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but found '{value}'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid column '{x}': {error}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid row '{y}': {error}"))?;
    Ok(Vec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use iveria_core::Vec2;

    use super::{parse_position, Args};

    #[test]
    fn position_parses_signed_pairs() {
        assert_eq!(parse_position("10, -3"), Ok(Vec2::new(10, -3)));
        assert!(parse_position("10").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn arguments_default_sensibly() {
        let args = Args::try_parse_from(["iveria"]).expect("defaults parse");
        assert!(args.start.is_none());
        assert!(args.seed.is_none());
        assert!(args.script.is_empty());
        assert!(!args.color);
    }

    #[test]
    fn arguments_accept_overrides() {
        let args = Args::try_parse_from([
            "iveria",
            "--seed",
            "42",
            "--width",
            "90",
            "--max-passes",
            "500",
            "--start",
            "4,5",
            "--script",
            "RRG",
            "--color",
        ])
        .expect("arguments parse");
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.width, Some(90));
        assert_eq!(args.max_passes, Some(500));
        assert_eq!(args.start, Some(Vec2::new(4, 5)));
        assert_eq!(args.script, "RRG");
        assert!(args.color);
    }
}
