//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Convert a PNG or JPEG image into a 256x256 Windows icon
#[derive(Parser, Debug)]
#[command(
    name = "img_to_ico",
    version,
    about = "Convert a PNG or JPEG image into a 256x256 Windows icon",
    long_about = "Convert a PNG or JPEG image into a single-image Windows ICO file.

The image is centered on a transparent square canvas, scaled to 256x256 and
embedded as PNG. By default the icon is written next to the input with its
extension replaced by .ico.

Usage:
  img_to_ico photo.jpg
  img_to_ico logo.png --output assets/app.ico"
)]
pub struct Args {
    /// Image to convert (.png, .jpg or .jpeg)
    #[arg(index = 1, value_name = "SRC")]
    pub source: PathBuf,

    /// Write the icon here instead of next to the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print every pipeline step
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_os_str().is_empty() {
            return Err("Source image is required".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Explicit output path, if any
    pub output: Option<PathBuf>,
    output_manager: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: args.output.clone(),
            output_manager: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output_manager.verbose(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output_manager.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output_manager.indent(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_only() {
        let args = Args::try_parse_from(["img_to_ico", "photo.jpg"]).unwrap();
        assert_eq!(args.source, PathBuf::from("photo.jpg"));
        assert!(args.output.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_output_flag() {
        let args = Args::try_parse_from(["img_to_ico", "a.png", "-o", "b.ico"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("b.ico")));

        let config = RuntimeConfig::from(&args);
        assert_eq!(config.output, Some(PathBuf::from("b.ico")));
    }

    #[test]
    fn test_missing_source_is_usage_error() {
        let err = Args::try_parse_from(["img_to_ico"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["img_to_ico", "a.png", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert!(Args::try_parse_from(["img_to_ico", ""]).is_err());

        let args = Args {
            source: PathBuf::new(),
            output: None,
            verbose: false,
            quiet: false,
        };
        assert!(args.validate().is_err());
    }
}
