use std::io::{self, BufRead};
use std::process::ExitCode;

use pokerhand::{cli, Config};
use tracing::{debug, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, "Loaded configuration");

    // Hands come from the arguments, or one per line on stdin
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if args.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(args.into_iter().map(Ok))
    };

    match cli::run(inputs, &config, &mut io::stdout().lock()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            warn!(failures, "Some hands could not be classified");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
