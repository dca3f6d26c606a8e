//! mazewalk CLI
//!
//! Decides whether a maze file has a path from its start `o` to a goal `*`.
//!
//! ```text
//! mazewalk maze.txt stack
//! mazewalk maze.txt queue --step
//! mazewalk maze.txt queue --also other.txt --also third.txt
//! ```
//!
//! Prints `Maze solution found` or `Maze solution does not exist`. Exit code
//! 1 when any maze could not be loaded.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use mazewalk::{
    solve_files, Grid, MazeError, Outcome, Policy, PromptObserver, SolverConfig, Traversal,
};

/// Frontier-driven maze solver
#[derive(Parser)]
#[command(name = "mazewalk")]
#[command(version)]
#[command(about = "Reports whether a maze's goal is reachable from its start")]
struct Cli {
    /// Maze file: a `width height` header, then rows of `#`, `.`, `o`, `*`
    maze: PathBuf,

    /// Frontier ordering: `stack` is depth-first, `queue` is breadth-first
    #[arg(value_enum, ignore_case = true, env = "MAZEWALK_POLICY")]
    policy: Policy,

    /// Further maze files, solved in parallel with the same policy
    #[arg(long = "also", value_name = "MAZE")]
    also: Vec<PathBuf>,

    /// Print the maze after every step and wait for Enter
    #[arg(short, long)]
    step: bool,

    /// Print the explored maze when the search ends
    #[arg(long)]
    show: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig::new(self.policy)
            .interactive(self.step)
            .show_final(self.show)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let config = cli.config();

    if cli.also.is_empty() {
        return match solve_one(&cli.maze, &config) {
            Ok(outcome) => {
                println!("{}", outcome.verdict());
                ExitCode::SUCCESS
            }
            Err(err) => report_failure(&cli.maze, &err),
        };
    }

    let mut paths = Vec::with_capacity(cli.also.len() + 1);
    paths.push(cli.maze.clone());
    paths.extend(cli.also.iter().cloned());

    let mut code = ExitCode::SUCCESS;
    for report in solve_files(&paths, &config) {
        match report.result {
            Ok(outcome) => println!("{}: {}", report.path.display(), outcome.verdict()),
            Err(err) => code = report_failure(&report.path, &err),
        }
    }
    code
}

/// Solves a single maze, optionally stepping interactively and rendering
/// the explored grid at the end.
fn solve_one(path: &Path, config: &SolverConfig) -> Result<Outcome, MazeError> {
    let mut grid = Grid::from_path(path)?;

    let outcome = {
        let mut traversal = Traversal::new(&mut grid, config.policy.frontier());
        if config.interactive {
            let stdin = io::stdin();
            traversal.run_with(PromptObserver::new(stdin.lock(), io::stdout()))
        } else {
            traversal.run()
        }
    };

    if config.show_final {
        print!("{grid}");
    }
    Ok(outcome)
}

fn report_failure(path: &Path, err: &MazeError) -> ExitCode {
    debug!(path = %path.display(), error = ?err, "maze rejected");
    eprintln!("error: {}: {err}", path.display());
    ExitCode::FAILURE
}
