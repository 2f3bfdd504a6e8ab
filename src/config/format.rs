//! Closed enumerations accepted on the command line.
//!
//! Member names come from the `ValueEnum` derive, so the accepted values on
//! the command line always match the variants declared here.

use clap::ValueEnum;
use serde::Serialize;

/// Paper format of the generated PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperFormat {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
}

/// Style sheet used for syntax highlighting in code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeHighlightTheme {
    A11yDark,
    A11yLight,
    AtomOneDark,
    AtomOneLight,
    Dark,
    Default,
    #[default]
    Github,
    GithubDark,
    GithubDarkDimmed,
    Idea,
    Monokai,
    MonokaiSublime,
    Nord,
    Obsidian,
    Vs,
    Vs2015,
    Xcode,
}

/// Characters placed before table-of-contents entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    None,
    #[default]
    Decimal,
    Disc,
    Circle,
    Square,
}

/// Tab leader between a table-of-contents title and its page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Leader {
    None,
    #[default]
    Dot,
    Dash,
    Underscore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_enum_names_are_kebab_case() {
        let names: Vec<String> = CodeHighlightTheme::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|pv| pv.get_name().to_string())
            .collect();
        assert!(names.contains(&"github-dark".to_string()));
        assert!(names.contains(&"atom-one-light".to_string()));
    }

    #[test]
    fn test_paper_format_case_insensitive_lookup() {
        assert_eq!(PaperFormat::from_str("A4", true), Ok(PaperFormat::A4));
        assert_eq!(PaperFormat::from_str("letter", true), Ok(PaperFormat::Letter));
        assert!(PaperFormat::from_str("A7", true).is_err());
        assert_eq!(PaperFormat::value_variants().len(), 11);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&PaperFormat::A4).unwrap(), "\"a4\"");
        assert_eq!(
            serde_json::to_string(&Leader::Underscore).unwrap(),
            "\"underscore\""
        );
    }
}
