use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weavekit::cli::{Cli, Commands};
use weavekit::commands::{init, plan};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Plan {
            manifest,
            format,
            config,
        } => plan::run_plan(plan::PlanConfig {
            manifest,
            format,
            config,
        }),
        Commands::Init { force } => init::init_config(force),
    }
}

/// `log` records go through env_logger; tracing spans and events go to a
/// stderr fmt subscriber. Both honour `RUST_LOG` and default to `level`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        log::warn!("Tracing output disabled: {}", e);
    }
}
