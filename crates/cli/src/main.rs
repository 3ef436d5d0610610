mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{cmd_files, cmd_info, cmd_inspect};
use output::{OutputFormat, print_error};
use srcmodel_lib::consts::DEFAULT_SCRIPT;

/// srcmodel - inspect the source sets and dependency buckets of a build script
#[derive(Parser)]
#[command(name = "srcmodel")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project root (defaults to the directory containing the build script)
  #[arg(long, global = true, env = "SRCMODEL_PROJECT_DIR")]
  project_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a build script and show every component
  Inspect {
    /// Path to the build script
    #[arg(default_value = DEFAULT_SCRIPT)]
    script: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// List the files of a component's source set, or its headers
  Files {
    /// Component name
    component: String,

    /// Source set to list (lists the header tree when omitted)
    #[arg(short, long)]
    source_set: Option<String>,

    /// Path to the build script
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    script: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Show version and supported component kinds
  Info,
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(err) = run(cli) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let project_dir = cli.project_dir.as_deref();
  match cli.command {
    Commands::Inspect { script, format } => cmd_inspect(&script, project_dir, format, cli.verbose),
    Commands::Files {
      component,
      source_set,
      script,
      format,
    } => cmd_files(&script, project_dir, &component, source_set.as_deref(), format),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
