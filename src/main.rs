use clap::Parser;
use portfolio_content::cli::{Args, commands};
use std::process;
use tracing::debug;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    match commands::run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Set up structured logging on stderr, keeping stdout for JSON output
///
/// `--quiet` drops timestamps and uses the compact format; `--verbose` also
/// shows the module each event came from. `RUST_LOG` replaces the default filter.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));

    let compact = args.quiet.then(|| {
        fmt::layer()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });
    let full = (!args.quiet).then(|| {
        fmt::layer()
            .with_target(args.verbose)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(full)
        .init();

    debug!("Logging initialized with filter: {}", args.log_directive());
}
