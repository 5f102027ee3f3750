pub mod commands;
pub mod config;

pub use config::{CliConfig, ConfigError};

pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    run_with_config(args, &config)
}

pub fn run_with_config(args: &[String], config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.is_empty() {
        print_usage();
        return Err("No command provided".into());
    }

    match args[0].as_str() {
        "info" => with_causes(commands::info::execute(&args[1..])),
        "verify" => with_causes(commands::verify::execute(&args[1..])),
        "dump" => with_causes(commands::dump::execute(&args[1..])),
        "hexdump" => with_causes(commands::hexdump::execute(&args[1..], config)),
        "help" => {
            print_usage();
            Ok(())
        }
        "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        "-v" | "--version" => {
            print_version();
            Ok(())
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", args[0]);
            print_usage();
            Err(format!("Unknown command: {}", args[0]).into())
        }
    }
}

/// Flattens the context chain into the message so callers printing with `{}` see the cause.
fn with_causes(result: anyhow::Result<()>) -> Result<(), Box<dyn std::error::Error>> {
    result.map_err(|err| format!("{:#}", err).into())
}

fn print_usage() {
    println!("colordetect - inspect the embedded color detection model");
    println!();
    println!("USAGE:");
    println!("    colordetect <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    info [--json]                        Show size, header and checksum of the model");
    println!("    verify                               Run the loading-time integrity checks");
    println!("    dump <PATH|->                        Write the raw model bytes to a file or stdout");
    println!("    hexdump [--offset N] [--length N]    Print a hex view of the model");
    println!("    help                                 Print this help message");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    {}            Log filter (default: warn)", config::LOG_ENV);
    println!("    {}  Default hexdump length (default: 256)", config::HEXDUMP_LIMIT_ENV);
}

fn print_version() {
    println!(
        "colordetect {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_COMMIT_HASH")
    );
}
