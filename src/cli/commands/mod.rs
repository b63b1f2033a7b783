//! CLI command implementations

pub mod export;
pub mod output;

pub use export::execute as export;
pub use output::execute as output;

use crate::cli::args::OutputFormat;
use crate::error::StackrefResult;

/// Print one resolved value
pub(crate) fn print_value(value: &str, format: OutputFormat) -> StackrefResult<()> {
    match format {
        OutputFormat::Plain => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

/// Print a sequence of keys or names
pub(crate) fn print_list(values: &[String], format: OutputFormat) -> StackrefResult<()> {
    match format {
        OutputFormat::Plain => {
            for value in values {
                println!("{value}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(values)?),
    }
    Ok(())
}
