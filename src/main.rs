//! img_to_ico - convert a PNG or JPEG image into a 256x256 Windows icon.

use img_to_ico::cli;
use img_to_ico::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new(false, false);
            output.error(&format!("Conversion failed: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.indent("Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&format!("  • {suggestion}"));
                }
            }

            process::exit(1);
        }
    }
}
