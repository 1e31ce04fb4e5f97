use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::output::{OutputFormat, ReportFormat};

/// Tech stack detection for CI/CD image selection
#[derive(Parser, Debug)]
#[command(
    name = "stackradar",
    about = "Detect language, version, build tool and CI image tag of a repository",
    version,
    author,
    long_about = "stackradar inspects a local repository and infers its dominant language, \
                  the build tool it uses and the language version it pins, then renders a \
                  container image tag suitable for CI. GitHub Linguist is used when installed; \
                  otherwise well-known project files decide."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect tech stack from a local repository",
        long_about = "Analyzes a local repository to detect programming language, version, \
                      build tool and CI image tag.\n\n\
                      Examples:\n  \
                      stackradar get\n  \
                      stackradar get --path ./service --format json\n  \
                      stackradar get -f env -o stack.env"
    )]
    Get(GetArgs),

    #[command(
        about = "Check dependencies",
        long_about = "Reports whether the external language classifier (GitHub Linguist) is \
                      available, and the effective configuration.\n\n\
                      Examples:\n  \
                      stackradar check\n  \
                      stackradar check --format json"
    )]
    Check(CheckArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GetArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        default_value = ".",
        help = "Local repository path"
    )]
    pub path: PathBuf,

    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        help = "Local repository directory (overrides --path)"
    )]
    pub directory: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

impl GetArgs {
    /// Repository to inspect: `--directory` when given, else `--path`.
    pub fn target(&self) -> &PathBuf {
        self.directory.as_ref().unwrap_or(&self.path)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: ReportFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Yaml,
    Json,
    Env,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Env => OutputFormat::Env,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Human => ReportFormat::Human,
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Yaml => ReportFormat::Yaml,
        }
    }
}
