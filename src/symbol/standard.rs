//! The symbols understood by the `mdpdf` command line.

use super::{Arity, EnumCatalog, Symbol, SymbolRegistry, ValueType};
use crate::config::{CodeHighlightTheme, Leader, ListStyle, PaperFormat};
use crate::error::Result;
use crate::validate::Validator;

/// Canonical symbol names.
pub mod names {
    pub const INPUT_PATH: &str = "input-path";
    pub const OUTPUT_PATH: &str = "output-path";
    pub const FROM_FRONT_MATTER: &str = "options-from-yaml-front-matter";
    pub const HEADER_PATH: &str = "header-path";
    pub const FOOTER_PATH: &str = "footer-path";
    pub const OPEN_AFTER_CONVERSION: &str = "open-after-conversion";
    pub const MARGINS: &str = "margins";
    pub const CHROME_PATH: &str = "chrome-path";
    pub const CODE_HIGHLIGHT_THEME: &str = "code-highlight-theme";
    pub const CUSTOM_HEAD_CONTENT: &str = "custom-head-content";
    pub const DOCUMENT_TITLE: &str = "document-title";
    pub const METADATA_TITLE: &str = "metadata-title";
    pub const AUTO_LANGUAGE_DETECTION: &str = "enable-auto-language-detection";
    pub const FORMAT: &str = "format";
    pub const IS_LANDSCAPE: &str = "is-landscape";
    pub const KEEP_HTML: &str = "keep-html";
    pub const SCALE: &str = "scale";
    pub const THEME: &str = "theme";
    pub const TOC_MIN_DEPTH: &str = "toc-min-depth";
    pub const TOC_MAX_DEPTH: &str = "toc-max-depth";
    pub const TOC_LIST_STYLE: &str = "toc-list-style";
    pub const TOC_HAS_COLORED_LINKS: &str = "toc-has-colored-links";
    pub const TOC_TAB_LEADER: &str = "toc-page-numbers-tab-leader";
}

use names::*;

const TOC_DEPTH: Validator = Validator::InBounds {
    low: 1.0,
    high: 6.0,
};

impl SymbolRegistry {
    /// Build the registry of every argument and option `mdpdf` accepts.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        for symbol in standard_symbols() {
            registry.register(symbol)?;
        }
        Ok(registry)
    }
}

fn standard_symbols() -> Vec<Symbol> {
    vec![
        Symbol::argument(INPUT_PATH, Arity::ExactlyOne)
            .with_validator(Validator::FileExists)
            .with_description("The path to the markdown file to convert."),
        Symbol::argument(OUTPUT_PATH, Arity::ZeroOrOne).with_description(
            "Path where the PDF file is generated. Defaults to <markdown-filename>.pdf.",
        ),
        Symbol::flag(FROM_FRONT_MATTER, &["-y", "--options-from-yaml-front-matter"])
            .with_default("false")
            .with_description("Load the options from the YAML front matter block of the document."),
        Symbol::option(HEADER_PATH, &["-h", "--header-path"], ValueType::String)
            .with_validator(Validator::FileExists)
            .with_description("Path to an html file to use as the document header."),
        Symbol::option(FOOTER_PATH, &["-f", "--footer-path"], ValueType::String)
            .with_validator(Validator::FileExists)
            .with_description("Path to an html file to use as the document footer."),
        Symbol::flag(OPEN_AFTER_CONVERSION, &["-o", "--open-after-conversion"])
            .with_default("false")
            .with_description("Open the generated PDF after conversion."),
        Symbol::option(MARGINS, &["-m", "--margins"], ValueType::Composite)
            .with_default("50px")
            .with_description("CSS margins for the content, comma-separated."),
        Symbol::option(CHROME_PATH, &["-c", "--chrome-path"], ValueType::String)
            .with_validator(Validator::FileExists)
            .with_description("Path to a chrome or chromium executable."),
        Symbol::option(
            CODE_HIGHLIGHT_THEME,
            &["--code-highlight-theme"],
            ValueType::Enum(EnumCatalog::of::<CodeHighlightTheme>()),
        )
        .with_default("github")
        .with_description("The theme used for styling code blocks."),
        Symbol::option(CUSTOM_HEAD_CONTENT, &["--custom-head-content"], ValueType::String)
            .with_description("Content for the html <head>, for extra scripts or styles."),
        Symbol::option(DOCUMENT_TITLE, &["--document-title"], ValueType::String).with_description(
            "The title of the document, injected into elements with the document-title class.",
        ),
        Symbol::option(METADATA_TITLE, &["--metadata-title"], ValueType::String)
            .with_description("The title stored in the PDF metadata."),
        Symbol::flag(AUTO_LANGUAGE_DETECTION, &["--enable-auto-language-detection"])
            .with_default("false")
            .with_description("Detect the language of code blocks without one."),
        Symbol::option(
            FORMAT,
            &["--format"],
            ValueType::Enum(EnumCatalog::of::<PaperFormat>()),
        )
        .with_default("A4")
        .with_description("The paper format of the PDF."),
        Symbol::flag(IS_LANDSCAPE, &["-l", "--is-landscape"])
            .with_default("false")
            .with_description("Use landscape orientation."),
        Symbol::flag(KEEP_HTML, &["-k", "--keep-html"])
            .with_default("false")
            .with_description("Keep the intermediate html file."),
        Symbol::option(SCALE, &["-s", "--scale"], ValueType::Decimal)
            .with_default("1")
            .with_validator(Validator::InBounds {
                low: 0.1,
                high: 2.0,
            })
            .with_description("Scale of the content, between 0.1 and 2."),
        Symbol::option(THEME, &["-t", "--theme"], ValueType::String)
            .with_default("github")
            .with_description("Document theme: github, latex, none, or a path to a custom css."),
        Symbol::option(TOC_MIN_DEPTH, &["--toc-min-depth"], ValueType::Integer)
            .with_validator(TOC_DEPTH)
            .with_description("Smallest heading level included in the table of contents (1-6)."),
        Symbol::option(TOC_MAX_DEPTH, &["--toc-max-depth"], ValueType::Integer)
            .with_validator(TOC_DEPTH)
            .with_description("Largest heading level included in the table of contents (1-6)."),
        Symbol::option(
            TOC_LIST_STYLE,
            &["--toc-list-style"],
            ValueType::Enum(EnumCatalog::of::<ListStyle>()),
        )
        .with_description("Characters placed before table of contents entries."),
        Symbol::flag(TOC_HAS_COLORED_LINKS, &["--toc-has-colored-links"])
            .with_description("Render table of contents entries in the link color."),
        Symbol::option(
            TOC_TAB_LEADER,
            &["--toc-page-numbers-tab-leader"],
            ValueType::Enum(EnumCatalog::of::<Leader>()),
        )
        .with_description("Add page numbers to the table of contents, led by this character."),
    ]
}
