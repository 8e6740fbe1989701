//! Bracketeer CLI - Command-line interface
//!
//! Commands:
//! - knockout: Generate a knockout bracket (pooled for large fields)
//! - round-robin: Generate a league schedule with playoffs
//! - serve: Start the HTTP API server

mod bracket_art;
mod fixtures_cmd;
mod roster;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bracketeer_core::{parse_seed, GeneratorConfig, DEFAULT_POOL_THRESHOLD};

#[derive(Parser)]
#[command(name = "bracketeer")]
#[command(about = "Tournament fixture generator")]
#[command(version)]
struct Cli {
    /// Random seed for a reproducible draw (decimal or 0x hex)
    #[arg(long, global = true, value_parser = parse_seed)]
    seed: Option<u64>,

    /// Largest field bracketed without pools (power of two)
    #[arg(long, global = true, default_value_t = DEFAULT_POOL_THRESHOLD)]
    pool_threshold: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a knockout bracket
    Knockout(fixtures_cmd::KnockoutArgs),
    /// Generate a round-robin league with playoffs
    RoundRobin(fixtures_cmd::RoundRobinArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default().with_pool_threshold(self.pool_threshold);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.generator_config();

    match cli.command {
        Commands::Knockout(args) => fixtures_cmd::run_knockout(args, config),
        Commands::RoundRobin(args) => fixtures_cmd::run_round_robin(args, config),
        Commands::Serve(args) => server::run(args, config),
    }
}
