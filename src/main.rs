//! Syllable Swap - CLI
//!
//! Play the syllable tile-swap puzzle interactively or from a move script.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use syllable_swap::{
    catalog::{ConfigId, DEFAULT_CONFIG},
    commands::{Move, run_script, run_simple},
    output::{OutputFormat, print_catalog, print_snapshot},
    puzzle::Session,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "syllable_swap",
    about = "Swap syllables on a 4x4 grid until every row spells a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle configuration id (see `list`)
    #[arg(short, long, global = true, default_value_t = DEFAULT_CONFIG.value())]
    config: u8,

    /// Output format for boards
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every move to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple interactive mode (default)
    Simple,

    /// Apply a script of moves and print the final board
    Play {
        /// Moves: 'r,c:r,c' to swap, 'undo', or 'reset'
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Print the starting board of a configuration
    Show,

    /// List available configurations
    List,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigId::new(cli.config);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple_command(config),
        Commands::Play { moves } => run_play_command(config, &moves, cli.format),
        Commands::Show => run_show_command(config, cli.format),
        Commands::List => {
            print_catalog();
            Ok(())
        }
    }
}

fn new_session(config: ConfigId) -> Result<Session<'static>> {
    Session::from_catalog(config).context("cannot start puzzle")
}

fn run_simple_command(config: ConfigId) -> Result<()> {
    let mut session = new_session(config)?;
    run_simple(&mut session)
}

fn run_show_command(config: ConfigId, format: OutputFormat) -> Result<()> {
    let session = new_session(config)?;
    print_snapshot(&session.snapshot(), format).context("failed to render board")
}

fn run_play_command(config: ConfigId, moves: &[String], format: OutputFormat) -> Result<()> {
    let script = moves
        .iter()
        .map(|token| {
            token
                .parse::<Move>()
                .with_context(|| format!("invalid move '{token}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = new_session(config)?;
    let report = run_script(&mut session, &script);

    print_snapshot(&session.snapshot(), format).context("failed to render board")?;

    if format == OutputFormat::Text && !report.ignored.is_empty() {
        eprintln!(
            "{}",
            format!(
                "{} of {} moves had no effect",
                report.ignored.len(),
                script.len()
            )
            .yellow()
        );
    }

    Ok(())
}
