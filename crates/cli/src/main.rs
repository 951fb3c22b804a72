use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// skbuild - GN/Ninja build orchestrator for the Skia checkout
#[derive(Parser)]
#[command(name = "skbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Configure and build Skia for a target
  Build {
    #[command(flatten)]
    target: cmd::TargetOpts,

    /// Print the planned tool invocations without running them
    #[arg(long)]
    dry_run: bool,
  },

  /// Print the GN arguments assembled for a target
  Args {
    #[command(flatten)]
    target: cmd::TargetOpts,

    /// Output format
    #[arg(long, value_enum, default_value_t = output::OutputFormat::Text)]
    format: output::OutputFormat,
  },

  /// Insert the missing <cstdint> include into the vendored GN checkout
  Patch {
    /// Checkout root containing the gn/ tree
    #[arg(long, default_value = ".")]
    root: PathBuf,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Build { target, dry_run } => cmd::cmd_build(&target, dry_run),
    Commands::Args { target, format } => cmd::cmd_args(&target, format),
    Commands::Patch { root } => cmd::cmd_patch(&root),
  }
}
