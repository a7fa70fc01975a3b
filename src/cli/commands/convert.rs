//! Convert command implementation.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::pipeline::{ConversionReport, Converter};
use std::path::Path;

/// Run validate → render → write for one source image
pub(super) fn execute_convert(source: &Path, config: &RuntimeConfig) -> Result<ConversionReport> {
    let converter = Converter::new();

    let input = converter.validate(source)?;
    config.verbose_println(&format!(
        "Validated {} ({})",
        input.path().display(),
        input.format()
    ));

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| input.default_output_path());

    let rendered = converter.render(&input)?;
    config.verbose_println(&format!(
        "Rendered {}x{} source to {}x{}",
        rendered.source_width,
        rendered.source_height,
        rendered.bitmap.width(),
        rendered.bitmap.height()
    ));

    let report = converter.write(&input, &rendered, &output)?;

    config.success_println(&format!("Created {}", report.output.display()));
    config.indent(&format!(
        "source: {}x{} {}",
        report.source_width, report.source_height, report.format
    ));
    config.indent(&format!(
        "padding: top {}, left {}",
        report.padding.top, report.padding.left
    ));
    config.indent(&format!(
        "icon: {}x{}, {} bytes ({} bytes PNG)",
        report.entry.width_px(),
        report.entry.height_px(),
        report.ico_len(),
        report.png_len()
    ));

    Ok(report)
}
