//! # errchain CLI
//!
//! Runs the file -> config -> operation request and prints the outcome.
//!
//! Usage:
//!   errchain [run] [--config <path>] [--config-details <s>] [--details <s>]
//!   errchain codes
//!
//! Examples:
//!   errchain
//!   errchain run --config ./config.json --details "job=backup"
//!   errchain run --memory --json
//!   RUST_LOG=debug errchain run

use anyhow::Context;
use clap::{Parser, Subcommand};
use errchain_core::ErrorCode;
use errchain_layers::{
    handle_request, ErrorHigh, ErrorLow, ErrorMid, FileSource, FsSource, MemorySource,
    ReportFormat, Settings,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "errchain")]
#[command(author, version, about = "errchain - layered errors with full history")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the layered request (default)
    Run(RunArgs),
    /// List the error codes of every layer
    Codes,
}

#[derive(clap::Args, Clone)]
struct RunArgs {
    /// Config file opened by the low layer
    #[arg(short, long)]
    config: Option<String>,

    /// Details attached when the config layer wraps a failure
    #[arg(long)]
    config_details: Option<String>,

    /// Details attached when the operation layer wraps a failure
    #[arg(short, long)]
    details: Option<String>,

    /// Read from an empty in-memory source instead of the filesystem
    #[arg(long)]
    memory: bool,

    /// Print the failure as JSON instead of a single line
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(path) = &self.config {
            settings.config_path = path.clone();
        }
        if let Some(details) = &self.config_details {
            settings.config_details = details.clone();
        }
        if let Some(details) = &self.details {
            settings.operation_details = details.clone();
        }
        settings
    }

    fn source(&self) -> Box<dyn FileSource> {
        if self.memory {
            Box::new(MemorySource::new())
        } else {
            Box::new(FsSource::new())
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

fn run<O, E>(args: &RunArgs, out: &mut O, err: &mut E) -> anyhow::Result<bool>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let settings = args.settings();
    debug!(config = %settings.config_path, memory = args.memory, ?format, "running request");

    handle_request(&args.source(), &settings, format, out, err)
        .context("failed to write report")
}

fn print_codes<C: ErrorCode>(layer: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}:", layer)?;
    for code in C::variants() {
        writeln!(out, "  - {}", code.as_str())?;
    }
    Ok(())
}

fn show_codes() -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    print_codes::<ErrorLow>("low", &mut out)?;
    print_codes::<ErrorMid>("mid", &mut out)?;
    print_codes::<ErrorHigh>("high", &mut out)?;
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(Commands::Codes) => {
            show_codes()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Run(args)) => run_to_stdio(&args),
        None => run_to_stdio(&cli.run),
    }
}

fn run_to_stdio(args: &RunArgs) -> anyhow::Result<ExitCode> {
    let ok = run(args, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
