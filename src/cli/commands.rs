use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Fetch a repository README and review it stage by stage
#[derive(Parser, Debug)]
#[command(
    name = "readme-review",
    about = "Human-in-the-loop README reviewer",
    version,
    author,
    long_about = "readme-review fetches a GitHub repository's README, runs section analysis, \
                  tag recommendation and title/intro suggestions over it, and pauses after \
                  each stage so you can continue, stop, or replace the text being analyzed.\n\n\
                  Examples:\n  \
                  readme-review --repo https://github.com/acme/widget\n  \
                  readme-review --repo acme/widget --no-interactive\n  \
                  readme-review --repo acme/widget --no-interactive --format json"
)]
pub struct CliArgs {
    #[arg(long, value_name = "URL", help = "GitHub repository URL to analyze")]
    pub repo: String,

    #[arg(long, help = "Run the pipeline without human prompts")]
    pub no_interactive: bool,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "HTTP timeout in seconds [default: 10]"
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Directory for the report and recommendations files [default: outputs]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format for the final summary"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["readme-review", "--repo", "acme/widget"]);
        assert_eq!(args.repo, "acme/widget");
        assert!(!args.no_interactive);
        assert!(args.timeout.is_none());
        assert!(args.output_dir.is_none());
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_options() {
        let args = CliArgs::parse_from([
            "readme-review",
            "--repo",
            "https://github.com/acme/widget",
            "--no-interactive",
            "--timeout",
            "30",
            "--output-dir",
            "/tmp/out",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert!(args.no_interactive);
        assert_eq!(args.timeout, Some(30));
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(args.format, OutputFormatArg::Json);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_repo_is_required() {
        assert!(CliArgs::try_parse_from(["readme-review"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from(["readme-review", "--repo", "a/b", "-v", "-q"]);
        assert!(result.is_err());
    }
}
