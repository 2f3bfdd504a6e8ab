//! Resolved configuration and the converter-facing options.

use super::{CodeHighlightTheme, Leader, ListStyle, PaperFormat, Theme};
use crate::error::Result;
use crate::shorthand::DirectionalValue;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The finished output of argument resolution.
///
/// Built once per invocation and owned by whoever invokes the converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfiguration {
    /// Markdown file to convert
    pub input_path: PathBuf,

    /// Where the PDF is written
    pub output_path: PathBuf,

    /// Open the PDF once it has been written
    pub open_after_conversion: bool,

    /// Options passed through to the conversion engine
    pub options: ConverterOptions,
}

impl ResolvedConfiguration {
    /// Input path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Serialize the configuration for an out-of-process engine.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Options consumed by the conversion engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterOptions {
    /// Read the options from the document's YAML front matter instead
    pub from_front_matter: bool,

    /// HTML content of the page header
    pub header_html: Option<String>,

    /// HTML content of the page footer
    pub footer_html: Option<String>,

    /// Document style sheet
    pub theme: Theme,

    /// Style sheet for code blocks
    pub code_highlight_theme: CodeHighlightTheme,

    /// Page margins
    pub margins: DirectionalValue,

    /// Content scale (0.1 to 2.0)
    pub scale: f64,

    /// Paper format
    pub format: PaperFormat,

    /// Landscape orientation
    pub is_landscape: bool,

    /// Title injected into elements with the `document-title` class
    pub document_title: Option<String>,

    /// Title stored in the PDF metadata
    pub metadata_title: Option<String>,

    /// Extra content for the HTML `<head>`
    pub custom_head_content: Option<String>,

    /// Chrome or Chromium executable
    pub chrome_path: Option<PathBuf>,

    /// Keep the intermediate HTML file
    pub keep_html: bool,

    /// Detect the language of unlabeled code blocks
    pub enable_auto_language_detection: bool,

    /// Table of contents, absent when no TOC option was given
    pub table_of_contents: Option<TableOfContents>,
}

/// Table of contents settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    /// Smallest heading level to include (1-6)
    pub min_depth: Option<u8>,

    /// Largest heading level to include (1-6)
    pub max_depth: Option<u8>,

    /// Characters before each entry
    pub list_style: Option<ListStyle>,

    /// Render entries with the link color
    pub has_colored_links: bool,

    /// Page numbers, absent unless requested
    pub page_numbers: Option<PageNumberOptions>,
}

impl TableOfContents {
    /// Get the page number settings, creating them on first use.
    pub fn page_numbers_mut(&mut self) -> &mut PageNumberOptions {
        self.page_numbers.get_or_insert_with(PageNumberOptions::default)
    }
}

/// Page numbers in the table of contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageNumberOptions {
    /// Character leading from the title to the page number
    pub tab_leader: Leader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_created_once() {
        let mut toc = TableOfContents::default();
        assert!(toc.page_numbers.is_none());

        toc.page_numbers_mut().tab_leader = Leader::Dash;
        assert_eq!(toc.page_numbers_mut().tab_leader, Leader::Dash);
        assert_eq!(toc.page_numbers, Some(PageNumberOptions { tab_leader: Leader::Dash }));
    }
}
