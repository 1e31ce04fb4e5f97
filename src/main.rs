use stackradar::cli::commands::{CliArgs, Commands};
use stackradar::cli::handlers::{handle_check, handle_get};
use stackradar::util::logging::{config_from_env, init_logging, parse_level};
use stackradar::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Get(get_args) => handle_get(get_args, args.quiet),
        Commands::Check(check_args) => handle_check(check_args),
    };

    process::exit(exit_code);
}

/// Command-line flags take precedence over `STACKRADAR_LOG_LEVEL`.
fn init_logging_from_args(args: &CliArgs) {
    let mut config = config_from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}
