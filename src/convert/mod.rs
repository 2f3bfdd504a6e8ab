//! The boundary to the conversion engine.
//!
//! Markdown parsing, HTML rendering and PDF generation all live behind the
//! [`Converter`] trait. This crate only prepares what the engine needs.

use crate::config::{ConverterOptions, ResolvedConfiguration};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File extension of the converter's output.
pub const PDF_EXTENSION: &str = "pdf";

/// A markdown to PDF conversion engine.
pub trait Converter {
    /// Name used in log messages.
    fn name(&self) -> &str;

    /// Convert `input` and return the PDF bytes.
    ///
    /// `output` is where the caller will write the result; engines that keep
    /// intermediate files place them next to it.
    fn convert(&self, input: &Path, output: &Path, options: &ConverterOptions) -> Result<Vec<u8>>;
}

/// Run a converter on a resolved configuration.
pub fn convert(config: &ResolvedConfiguration, converter: &dyn Converter) -> Result<Vec<u8>> {
    log::info!(
        "converting {} with {}",
        config.input_path.display(),
        converter.name()
    );
    converter.convert(&config.input_path, &config.output_path, &config.options)
}

/// The input path with its extension replaced by `.pdf`.
///
/// Directory and base name are kept; an input without an extension gains
/// one.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(PDF_EXTENSION)
}
