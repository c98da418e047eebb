use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use taskboard_cli::commands::Command;
use taskboard_cli::{Board, CliResult};
use taskboard_core::local_today;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable name for the board snapshot path
const TB_BOARD_ENV: &str = "TB_BOARD";

/// Snapshot file used when neither --board nor TB_BOARD is set
const DEFAULT_BOARD_FILE: &str = "board.json";

/// Taskboard - dependency and timeline analysis for a task board
#[derive(Parser)]
#[command(name = "tb")]
#[command(version = "0.1.0")]
#[command(about = "Dependency and timeline analysis for a task board", long_about = None)]
struct Args {
    /// Path to the board snapshot JSON (can also be set via TB_BOARD env var)
    #[arg(long, global = true)]
    board: Option<PathBuf>,

    /// Date to treat as today (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, env = "TB_TODAY")]
    today: Option<NaiveDate>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the snapshot path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --board argument
/// 2. TB_BOARD environment variable (if non-empty)
/// 3. `board.json` in the working directory
fn resolve_board_path(cli_board: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_board {
        return path;
    }

    if let Ok(env_path) = std::env::var(TB_BOARD_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_BOARD_FILE)
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=taskboard_core=debug` - debug logs from the engine only
/// - unset - show warn and above
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> CliResult<()> {
    let args = Args::parse();
    run_with_args(&args)
}

/// Run the application with the given arguments
fn run_with_args(args: &Args) -> CliResult<()> {
    let Some(cmd) = &args.command else {
        println!("Welcome to Taskboard!");
        println!("Use 'tb --help' for usage information.");
        return Ok(());
    };

    let board_path = resolve_board_path(args.board.clone());
    let today = args.today.unwrap_or_else(local_today);
    debug!(path = %board_path.display(), %today, "loading board");

    let board = Board::load(&board_path, today)?;
    let result = cmd.execute(&board)?;
    println!("{}", result);

    Ok(())
}
