//! Docket CLI - track regulator meeting agendas and minutes.

use clap::Parser;
use docket_cli::config::OutputFormat;
use docket_cli::{commands, Cli, Command, Config, Formatter};
use docket_tracker::DocketTracker;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON output on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> docket_cli::Result<()> {
    if let Command::Init(args) = &cli.command {
        let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
        let formatter = Formatter::new(format, !cli.no_color);
        return commands::execute_init(args, cli.config.as_deref(), &formatter);
    }

    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let tracker_config = config.tracker_config(cli.snapshot.as_deref())?;
    let mut tracker = DocketTracker::new(tracker_config)?;

    commands::execute(cli.command, &mut tracker, &formatter)
}
