pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CheckArgs, CliArgs, Commands, GetArgs};
pub use output::{LanguageInfo, OutputFormat, OutputFormatter, ReportFormat, TechStack};
