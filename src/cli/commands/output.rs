//! Output command - resolve output values from one stack

use crate::cli::args::OutputArgs;
use crate::cli::commands::{print_list, print_value};
use crate::error::StackrefResult;
use crate::lookup::App;

/// Execute the output command
pub async fn execute(args: OutputArgs, app: &App) -> StackrefResult<()> {
    if args.list {
        let keys = app.list_output_keys(&args.stack_name).await?;
        return print_list(&keys, args.format);
    }

    match args.output_key {
        Some(key) => {
            let value = app.lookup_output(&args.stack_name, &key).await?;
            print_value(&value, args.format)
        }
        None => unreachable!("clap requires OUTPUT_KEY unless --list"),
    }
}
