//! Command execution: argument validation, conversion and result reporting.

mod convert;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use convert::execute_convert;

/// Execute the conversion described by parsed arguments.
///
/// Returns the process exit code for handled failures; conversion errors are
/// propagated so the caller can print them with recovery suggestions.
pub fn execute_command(args: Args) -> Result<i32> {
    if let Err(validation_error) = args.validate() {
        let output = super::OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);
    execute_convert(&args.source, &config)?;
    Ok(0)
}
