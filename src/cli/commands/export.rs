//! Export command - resolve account-wide exported values

use crate::cli::args::ExportArgs;
use crate::cli::commands::{print_list, print_value};
use crate::error::StackrefResult;
use crate::lookup::App;

/// Execute the export command
///
/// Values print in argument order as they resolve; the first failing
/// name aborts the command.
pub async fn execute(args: ExportArgs, app: &App) -> StackrefResult<()> {
    if args.list {
        let names = app.list_export_names().await?;
        return print_list(&names, args.format);
    }

    for name in &args.names {
        let value = app.lookup_export(name).await?;
        print_value(&value, args.format)?;
    }
    Ok(())
}
