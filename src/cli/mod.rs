//! Command-line surface: argument parsing, the interactive prompt, console
//! progress and final summary formatting.

pub mod commands;
pub mod console;
pub mod handlers;
pub mod output;
pub mod prompt;

pub use commands::{CliArgs, OutputFormatArg};
pub use console::ConsoleProgress;
pub use handlers::{apply_overrides, handle_review};
pub use output::{OutputFormat, OutputFormatter, RunStatus, RunSummary};
pub use prompt::{parse_choice, Choice, ConsolePrompt, PromptError};
