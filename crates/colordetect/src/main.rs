use colordetect_cli::CliConfig;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let command_args = args.get(1..).unwrap_or_default().to_vec();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let filter = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("Error: Invalid log filter {:?}: {}", config.log_filter, err);
            process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(err) = colordetect_cli::run_with_config(&command_args, &config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
