//! Terminal maze solver: load or generate a grid, search it, print a report.
//!
//! Run: cargo run --bin mazesolve -- --algorithm all --seed 7

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser};
use log::info;
use maze_core::{DEFAULT_COLS, DEFAULT_ROWS, Grid};
use maze_demos::{Selection, frame_count, render, render_frame};
use maze_gen::{MazeConfig, MazeGen};
use maze_paths::solve_grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "mazesolve", version, about = "Search a maze with BFS, DFS or Dijkstra")]
struct Args {
    /// Algorithms to run: bfs, dfs, dijkstra, a comma-separated list, or all.
    #[arg(short, long, default_value = "all", env = "MAZESOLVE_ALGORITHM")]
    algorithm: Selection,

    /// Read the grid from a text file (. open, # wall, S start, E end)
    /// instead of generating one.
    #[arg(short, long, env = "MAZESOLVE_MAP")]
    map: Option<PathBuf>,

    /// Rows of a generated maze.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Columns of a generated maze.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: i32,

    /// Wall placement attempts per cell of a generated maze.
    #[arg(long, default_value_t = 0.4)]
    density: f64,

    /// Seed for maze generation. Random if omitted.
    #[arg(long, env = "MAZESOLVE_SEED")]
    seed: Option<u64>,

    /// Replay each search frame by frame with this delay in milliseconds.
    #[arg(long, value_name = "MS")]
    animate: Option<u64>,

    /// Print only the summaries.
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn load_grid(args: &Args) -> Result<Grid, Box<dyn Error>> {
    if let Some(path) = &args.map {
        info!("loading grid from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        return Ok(text.parse()?);
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating maze with seed {seed}");
    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        wall_density: args.density,
    };
    let mut maze_gen = MazeGen::new(StdRng::seed_from_u64(seed));
    Ok(maze_gen.random_maze(&config)?)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let grid = load_grid(args)?;
    if !args.quiet {
        println!("{grid}\n");
    }

    for &algorithm in &args.algorithm.0 {
        let result = solve_grid(&grid, algorithm)?;

        if let Some(ms) = args.animate {
            for n in 0..=frame_count(&result) {
                println!("\x1b[2J\x1b[H{}", render_frame(&grid, &result, n));
                thread::sleep(Duration::from_millis(ms));
            }
        } else if !args.quiet {
            println!("{}\n", render(&grid, &result));
        }
        println!("{result}");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
