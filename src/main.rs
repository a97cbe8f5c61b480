use clap::Parser;
use tracing_subscriber::EnvFilter;

use peakcall_config::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("peakcall_config=debug,info")
    } else {
        EnvFilter::new("peakcall_config=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Peakcalls(args) => {
            cli::peakcalls::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Contrasts(args) => {
            cli::contrasts::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
