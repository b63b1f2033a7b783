//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// stackref - CloudFormation output/export lookup
///
/// Resolves stack output values and exported values by name. Remote
/// results are memoized for the lifetime of one invocation.
#[derive(Parser, Debug)]
#[command(name = "stackref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// AWS region to query
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Fetch fresh on every lookup instead of memoizing per run
    #[arg(long, global = true)]
    pub no_cache: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up an output value from a stack
    Output(OutputArgs),

    /// Look up an exported value
    Export(ExportArgs),
}

/// Arguments for the output command
#[derive(Parser, Debug)]
pub struct OutputArgs {
    /// Stack name
    pub stack_name: String,

    /// Output key to resolve
    #[arg(required_unless_present = "list", conflicts_with = "list")]
    pub output_key: Option<String>,

    /// Show all output keys of the stack instead
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Export names to resolve, in order
    #[arg(required_unless_present = "list", conflicts_with = "list")]
    pub names: Vec<String>,

    /// Show all exported names instead
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Output format for resolved values
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Plain,
    /// JSON
    Json,
}
