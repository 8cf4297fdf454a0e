use clap::Parser;
use tracing_subscriber::EnvFilter;

use motif_spotter::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("motif_spotter=debug,info")
    } else {
        EnvFilter::new("motif_spotter=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Translate(args) => {
            cli::translate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
