//! stackref - CloudFormation output/export lookup
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use stackref::cfn::SdkCloudFormation;
use stackref::cli::{Cli, Commands};
use stackref::error::StackrefResult;
use stackref::lookup::{App, LookupCache};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            let mut cause = std::error::Error::source(&e);
            while let Some(source) = cause {
                eprintln!("  {} {}", style("caused by:").dim(), source);
                cause = source.source();
            }
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> StackrefResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug. Logs go to
    // stderr so resolved values on stdout stay pipeable.
    let filter = match cli.verbose {
        0 => EnvFilter::new("stackref=warn"),
        1 => EnvFilter::new("stackref=info"),
        _ => EnvFilter::new("stackref=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Region and profile resolve through the SDK's default chain; the
    // flags (and AWS_REGION / AWS_PROFILE via clap env) override it.
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    if let Some(profile) = &cli.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;
    debug!("resolved region: {:?}", config.region());

    let cache = if cli.no_cache {
        debug!("memoization disabled (--no-cache)");
        None
    } else {
        Some(LookupCache::new())
    };
    let app = App::new(Box::new(SdkCloudFormation::from_config(&config)), cache);

    match cli.command {
        Commands::Output(args) => stackref::cli::commands::output(args, &app).await,
        Commands::Export(args) => stackref::cli::commands::export(args, &app).await,
    }
}
