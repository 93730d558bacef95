//! Team Balancer CLI
//!
//! Roster JSON -> two balanced teams (JSON), optional share text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tb_cli::{run_balance, Overrides};
use tb_core::BalanceMode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tb")]
#[command(version, about = "Split a roster into two balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a roster file
    Balance {
        /// Roster JSON: an array of players or a full balance request
        #[arg(long, value_name = "FILE")]
        roster: PathBuf,

        /// Shuffle seed (random when omitted, echoed in the output)
        #[arg(long)]
        seed: Option<u64>,

        /// Distribution mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Locale for team names (es-AR, en-US)
        #[arg(long)]
        locale: Option<String>,

        /// Refinement pass ceiling
        #[arg(long)]
        max_passes: Option<u32>,

        /// Write the response JSON here instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also print the plain-text lineup
        #[arg(long, default_value = "false")]
        share: bool,
    },

    /// Print the JSON Schema of a balance request
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Optimized,
    Alternating,
}

impl From<ModeArg> for BalanceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Optimized => BalanceMode::Optimized,
            ModeArg::Alternating => BalanceMode::Alternating,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Balance { roster, seed, mode, locale, max_passes, out, share } => {
            let overrides = Overrides { seed, mode: mode.map(Into::into), locale, max_passes };
            debug!("Roster: {}, overrides: {:?}", roster.display(), overrides);

            let response = run_balance(&roster, &overrides)?;
            info!(
                "Balanced {} players (seed {}, cost {})",
                response.result.total_players(),
                response.seed,
                response.result.cost()
            );

            let json = serde_json::to_string_pretty(&response)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Response saved to {}", path.display());
                }
                None => println!("{}", json),
            }

            if share {
                println!("\n{}", response.share_text);
            }
        }

        Commands::Schema => {
            println!("{}", tb_core::balance_request_schema_json());
        }
    }

    Ok(())
}
