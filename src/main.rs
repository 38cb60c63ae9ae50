//! Turtle Adventure entry point
//!
//! Headless native runner: builds a session from settings and flags, feeds
//! it scripted clicks, drives the tick loop and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use turtle_adventure::Settings;
use turtle_adventure::renderer::AsciiRenderer;
use turtle_adventure::sim::{GameState, TickInput, tick};

/// Guide the turtle home while dodging enemies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Arena width (overrides settings file)
    #[arg(long)]
    width: Option<f32>,

    /// Arena height (overrides settings file)
    #[arg(long)]
    height: Option<f32>,

    /// Game level
    #[arg(long)]
    level: Option<u32>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on live enemies
    #[arg(long)]
    max_enemies: Option<usize>,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 2000)]
    ticks: u64,

    /// Scripted click as TICK:X,Y (repeatable). Without any, the turtle
    /// heads straight for home on the first tick.
    #[arg(long = "click", value_parser = parse_click)]
    clicks: Vec<ScriptedClick>,

    /// Print the arena every N ticks (0 = final frame only)
    #[arg(long, default_value_t = 0)]
    frame_every: u64,

    /// Colorize frames with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Sleep one tick length between ticks
    #[arg(long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
struct ScriptedClick {
    tick: u64,
    x: f32,
    y: f32,
}

fn parse_click(s: &str) -> Result<ScriptedClick, String> {
    let (tick, pos) = s
        .split_once(':')
        .ok_or_else(|| format!("expected TICK:X,Y, got '{s}'"))?;
    let (x, y) = pos
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y after ':', got '{pos}'"))?;
    Ok(ScriptedClick {
        tick: tick.trim().parse().map_err(|e| format!("bad tick '{tick}': {e}"))?,
        x: x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?,
        y: y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?,
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn settings_from(args: &Args) -> turtle_adventure::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if args.max_enemies.is_some() {
        settings.max_enemies = args.max_enemies;
    }
    Ok(settings)
}

fn run(args: Args) -> turtle_adventure::Result<()> {
    let settings = settings_from(&args)?;
    let mut state = GameState::new(settings)?;
    let mut renderer = AsciiRenderer::new(state.arena, 80, 24).with_ansi(args.color);

    let clicks = if args.clicks.is_empty() {
        let home = state.home.pos;
        vec![ScriptedClick {
            tick: 1,
            x: home.x,
            y: home.y,
        }]
    } else {
        args.clicks.clone()
    };

    for t in 1..=args.ticks {
        let input = TickInput {
            click: clicks.iter().rev().find(|c| c.tick == t).map(|c| (c.x, c.y)),
            stop: false,
        };
        tick(&mut state, &input, &mut renderer);

        if args.frame_every > 0 && t % args.frame_every == 0 {
            println!("tick {t}\n{}", renderer.frame());
        }
        if !state.is_running() {
            break;
        }
        if args.realtime {
            std::thread::sleep(Duration::from_millis(state.tick_ms));
        }
    }

    if state.is_running() {
        log::info!("Tick budget of {} exhausted", args.ticks);
        state.stop();
    }

    println!("{}", renderer.frame());
    match serde_json::to_string_pretty(&state.summary()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not encode summary: {e}"),
    }

    state.shutdown(&mut renderer);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    log::info!("Turtle Adventure (headless) starting...");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
