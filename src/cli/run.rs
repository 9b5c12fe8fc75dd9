//! Run command implementation.

use super::output::{JsonMatchResult, format_text};
use super::{CliError, OutputFormat};
use skirmish::script::{Script, run_script};
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or output fails.
pub(crate) fn execute(
    script_path: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let script = Script::load(script_path)?;
    let result = run_script(&script);

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&result, quiet));
        }
        OutputFormat::Json => {
            let json_result = JsonMatchResult::from_result(&result);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
