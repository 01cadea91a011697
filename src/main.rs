use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::BoundaryPolicy;
use grid_snake::error::AppError;
use grid_snake::game::{GameController, Update};
use grid_snake::headless::{parse_script, simulate};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer::BoardView;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::timer::TickTimer;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

/// Upper bound on how long one input poll may block, so the screen keeps
/// redrawing while idle.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Treat the board edge as a wall instead of wrapping around.
    #[arg(long)]
    walls: bool,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Run without a terminal and print every effect as JSON.
    #[arg(long)]
    headless: bool,

    /// Turn script for headless runs: one of u, d, l, r, or `.` per tick.
    #[arg(long, default_value = "")]
    script: String,

    /// Maximum ticks for headless runs.
    #[arg(long, default_value_t = 100)]
    ticks: u64,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    }

    let policy = if cli.walls {
        BoundaryPolicy::HardWall
    } else {
        BoundaryPolicy::Wrap
    };

    if cli.headless {
        return run_headless(&cli, policy);
    }

    install_panic_hook();
    run(&cli, policy)
}

fn run(cli: &Cli, policy: BoundaryPolicy) -> Result<(), AppError> {
    let mut game = match cli.seed {
        Some(seed) => GameController::new_with_seed(policy, seed),
        None => GameController::new(policy),
    };
    let field = game.playfield();
    let mut view = BoardView::new();
    let mut timer = TickTimer::new();
    let mut input = InputHandler::new();

    let mut session = TerminalSession::enter()?;
    info!("terminal session started: policy={policy:?}");

    apply(&mut view, &mut timer, game.initialize());

    loop {
        session.draw(&view, field)?;

        let timeout = timer
            .remaining(Instant::now())
            .map_or(FRAME_INTERVAL, |remaining| remaining.min(FRAME_INTERVAL));

        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }
            apply(&mut view, &mut timer, game.handle_input(game_input));
        }

        if timer.fire_if_due(Instant::now()) {
            apply(&mut view, &mut timer, game.tick());
        }
    }

    info!(
        "quit: score={} high_score={}",
        game.score(),
        game.high_score()
    );
    Ok(())
}

fn apply(view: &mut BoardView, timer: &mut TickTimer, update: Update) {
    view.apply_all(&update.effects);
    timer.apply(update.schedule, Instant::now());
}

fn run_headless(cli: &Cli, policy: BoundaryPolicy) -> Result<(), AppError> {
    let script = parse_script(&cli.script)?;
    let seed = cli.seed.unwrap_or_default();
    let trace = simulate(policy, seed, &script, cli.ticks);

    let mut out = BufWriter::new(io::stdout().lock());
    for event in &trace {
        serde_json::to_writer(&mut out, event)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}
