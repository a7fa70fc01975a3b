//! Colored terminal output for conversions.
//!
//! Progress and results go to stdout and are silenced by `--quiet`; errors
//! always go to stderr.

use std::io::{self, Write};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Prints conversion progress with a colored marker per line
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// `✓ message` in green
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        emit(&self.stdout, Some(("✓", Color::Green)), message)
    }

    /// `→ message` in blue, only with `--verbose`
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        emit(&self.stdout, Some(("→", Color::Blue)), message)
    }

    /// Detail line under a previous message
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        emit(&self.stdout, None, &format!("    {message}"))
    }

    /// `✗ message` in red on stderr, regardless of `--quiet`
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        if emit(&stderr, Some(("✗", Color::Red)), message).is_err() {
            println!("✗ {message}");
        }
    }
}

fn emit(writer: &BufferWriter, marker: Option<(&str, Color)>, message: &str) -> io::Result<()> {
    let mut buffer = writer.buffer();
    if let Some((symbol, color)) = marker {
        buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(&mut buffer, "{symbol} ")?;
        buffer.reset()?;
    }
    writeln!(&mut buffer, "{message}")?;
    writer.print(&buffer)
}
