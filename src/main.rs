use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod client;
mod core;
mod resolve;
mod tables;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("chembl_enrich=debug,info")
    } else {
        EnvFilter::new("chembl_enrich=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Enrich(args) => {
            cli::enrich::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
