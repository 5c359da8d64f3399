use readme_review::cli::{handle_review, CliArgs};
use readme_review::util::logging::{init_logging, json_from_env, parse_level, LoggingConfig};
use readme_review::{ReviewerConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let config = ReviewerConfig::load();
    init_logging_from_args(&args, &config);

    debug!("readme-review v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_review(&args, config);
    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &ReviewerConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    init_logging(LoggingConfig {
        level,
        use_json: json_from_env(),
        ..Default::default()
    });
}
