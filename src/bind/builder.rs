//! Incremental construction of a [`ResolvedConfiguration`].

use crate::config::{
    CodeHighlightTheme, ConverterOptions, PageNumberOptions, PaperFormat, ResolvedConfiguration,
    TableOfContents, Theme,
};
use crate::convert::default_output_path;
use crate::error::{Error, Result};
use crate::shorthand::DirectionalValue;
use std::path::PathBuf;

/// Collects bound fields until every required one is known.
///
/// Nested structures start out absent and are created by the first write
/// through their accessor.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub open_after_conversion: Option<bool>,
    pub from_front_matter: Option<bool>,
    pub header_html: Option<String>,
    pub footer_html: Option<String>,
    pub theme: Option<Theme>,
    pub code_highlight_theme: Option<CodeHighlightTheme>,
    pub margins: Option<DirectionalValue>,
    pub scale: Option<f64>,
    pub format: Option<PaperFormat>,
    pub is_landscape: Option<bool>,
    pub document_title: Option<String>,
    pub metadata_title: Option<String>,
    pub custom_head_content: Option<String>,
    pub chrome_path: Option<PathBuf>,
    pub keep_html: Option<bool>,
    pub enable_auto_language_detection: Option<bool>,
    table_of_contents: Option<TableOfContents>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the table of contents, creating it on first use.
    pub fn toc_mut(&mut self) -> &mut TableOfContents {
        self.table_of_contents
            .get_or_insert_with(TableOfContents::default)
    }

    /// Get the TOC page numbers, creating them (and the TOC) on first use.
    pub fn page_numbers_mut(&mut self) -> &mut PageNumberOptions {
        self.toc_mut().page_numbers_mut()
    }

    pub fn has_toc(&self) -> bool {
        self.table_of_contents.is_some()
    }

    /// Finish the configuration.
    ///
    /// Fails if a field without a declared default was never bound; that
    /// means the registry and the binder are out of step.
    pub fn build(self) -> Result<ResolvedConfiguration> {
        let input_path = required(self.input_path, "input-path")?;
        let output_path = self
            .output_path
            .unwrap_or_else(|| default_output_path(&input_path));

        let options = ConverterOptions {
            from_front_matter: required(self.from_front_matter, "from_front_matter")?,
            header_html: self.header_html,
            footer_html: self.footer_html,
            theme: required(self.theme, "theme")?,
            code_highlight_theme: required(self.code_highlight_theme, "code_highlight_theme")?,
            margins: required(self.margins, "margins")?,
            scale: required(self.scale, "scale")?,
            format: required(self.format, "format")?,
            is_landscape: required(self.is_landscape, "is_landscape")?,
            document_title: self.document_title,
            metadata_title: self.metadata_title,
            custom_head_content: self.custom_head_content,
            chrome_path: self.chrome_path,
            keep_html: required(self.keep_html, "keep_html")?,
            enable_auto_language_detection: required(
                self.enable_auto_language_detection,
                "enable_auto_language_detection",
            )?,
            table_of_contents: self.table_of_contents,
        };

        Ok(ResolvedConfiguration {
            input_path,
            output_path,
            open_after_conversion: required(self.open_after_conversion, "open_after_conversion")?,
            options,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::InternalBinding(format!("'{}' was never bound", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Leader, ListStyle};

    #[test]
    fn test_toc_created_on_first_write_and_reused() {
        let mut builder = ConfigurationBuilder::new();
        assert!(!builder.has_toc());

        builder.toc_mut().min_depth = Some(2);
        builder.toc_mut().list_style = Some(ListStyle::Square);
        builder.page_numbers_mut().tab_leader = Leader::Dash;

        let toc = builder.toc_mut();
        assert_eq!(toc.min_depth, Some(2));
        assert_eq!(toc.list_style, Some(ListStyle::Square));
        assert_eq!(toc.page_numbers.map(|p| p.tab_leader), Some(Leader::Dash));
    }

    #[test]
    fn test_build_without_required_fields_fails() {
        let builder = ConfigurationBuilder {
            input_path: Some(PathBuf::from("doc.md")),
            ..Default::default()
        };
        assert!(matches!(builder.build(), Err(Error::InternalBinding(_))));
    }
}
