//! Mapping accepted arguments onto a [`ResolvedConfiguration`].
//!
//! The binder walks the registry in declaration order. For each symbol it
//! takes the parsed value, or the symbol's declared default when absent, and
//! writes it into a [`ConfigurationBuilder`]. Symbols that are absent and
//! have no default are skipped, which is what keeps the table of contents
//! from being created unless one of its options was given.

mod builder;

pub use builder::ConfigurationBuilder;

use crate::config::{
    CodeHighlightTheme, Leader, ListStyle, PaperFormat, ResolvedConfiguration, Theme,
};
use crate::error::{Error, Result};
use crate::parser::RawArgument;
use crate::shorthand::DirectionalValue;
use crate::symbol::{names, Symbol, SymbolRegistry, Value};
use crate::validate;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

/// Binds parsed arguments to configuration fields.
#[derive(Debug, Clone, Copy)]
pub struct Binder<'r> {
    registry: &'r SymbolRegistry,
}

impl<'r> Binder<'r> {
    pub fn new(registry: &'r SymbolRegistry) -> Self {
        Self { registry }
    }

    /// Build the configuration. Either every field binds or nothing is
    /// returned.
    pub fn bind(&self, arguments: &[RawArgument]) -> Result<ResolvedConfiguration> {
        let mut builder = ConfigurationBuilder::new();

        for symbol in self.registry.symbols() {
            let value = match arguments.iter().find(|a| a.symbol() == symbol.name()) {
                Some(argument) => argument.value().clone(),
                None => match symbol.default_value() {
                    Some(default) => {
                        log::trace!("{} defaults to '{}'", symbol.name(), default);
                        symbol.value_type().convert(symbol.name(), default).map_err(|e| {
                            Error::InternalBinding(format!(
                                "declared default of '{}' is invalid: {}",
                                symbol.name(),
                                e
                            ))
                        })?
                    }
                    None => continue,
                },
            };

            self.apply(&mut builder, symbol, value)?;
        }

        builder.build()
    }

    fn apply(&self, builder: &mut ConfigurationBuilder, symbol: &Symbol, value: Value) -> Result<()> {
        let name = symbol.name();
        log::debug!("binding {}", name);

        match name {
            names::INPUT_PATH => builder.input_path = Some(PathBuf::from(string(name, value)?)),
            names::OUTPUT_PATH => builder.output_path = Some(PathBuf::from(string(name, value)?)),
            names::FROM_FRONT_MATTER => builder.from_front_matter = Some(boolean(name, value)?),
            names::OPEN_AFTER_CONVERSION => {
                builder.open_after_conversion = Some(boolean(name, value)?)
            }
            names::HEADER_PATH => {
                builder.header_html = Some(read_content(Path::new(&string(name, value)?))?)
            }
            names::FOOTER_PATH => {
                builder.footer_html = Some(read_content(Path::new(&string(name, value)?))?)
            }
            names::MARGINS => builder.margins = Some(directional(name, value)?),
            names::CHROME_PATH => builder.chrome_path = Some(PathBuf::from(string(name, value)?)),
            names::CODE_HIGHLIGHT_THEME => {
                builder.code_highlight_theme =
                    Some(self.member::<CodeHighlightTheme>(name, value)?)
            }
            names::CUSTOM_HEAD_CONTENT => builder.custom_head_content = Some(string(name, value)?),
            names::DOCUMENT_TITLE => builder.document_title = Some(string(name, value)?),
            names::METADATA_TITLE => builder.metadata_title = Some(string(name, value)?),
            names::AUTO_LANGUAGE_DETECTION => {
                builder.enable_auto_language_detection = Some(boolean(name, value)?)
            }
            names::FORMAT => builder.format = Some(self.member::<PaperFormat>(name, value)?),
            names::IS_LANDSCAPE => builder.is_landscape = Some(boolean(name, value)?),
            names::KEEP_HTML => builder.keep_html = Some(boolean(name, value)?),
            names::SCALE => builder.scale = Some(decimal(name, value)?),
            names::THEME => builder.theme = Some(Theme::resolve(&string(name, value)?)),
            names::TOC_MIN_DEPTH => builder.toc_mut().min_depth = Some(depth(name, value)?),
            names::TOC_MAX_DEPTH => builder.toc_mut().max_depth = Some(depth(name, value)?),
            names::TOC_LIST_STYLE => {
                builder.toc_mut().list_style = Some(self.member::<ListStyle>(name, value)?)
            }
            names::TOC_HAS_COLORED_LINKS => {
                builder.toc_mut().has_colored_links = boolean(name, value)?
            }
            names::TOC_TAB_LEADER => {
                builder.page_numbers_mut().tab_leader = self.member::<Leader>(name, value)?
            }
            other => {
                return Err(Error::InternalBinding(format!(
                    "no configuration field for symbol '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    fn member<E: ValueEnum + 'static>(&self, name: &str, value: Value) -> Result<E> {
        let token = match value {
            Value::Enum(token) | Value::String(token) => token,
            other => return Err(mismatch(name, "enum", &other)),
        };
        self.registry.resolve_enum::<E>(&token).ok_or_else(|| {
            Error::InternalBinding(format!("'{}' is not a member for '{}'", token, name))
        })
    }
}

/// Read a referenced file's content.
pub fn read_content(path: &Path) -> Result<String> {
    let full = validate::absolute(path);
    fs::read_to_string(&full).map_err(|source| Error::FileRead { path: full, source })
}

fn mismatch(name: &str, expected: &str, found: &Value) -> Error {
    Error::InternalBinding(format!(
        "'{}' expects a {} value, got a {} value",
        name,
        expected,
        found.type_name()
    ))
}

fn string(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(name, "string", &other)),
    }
}

fn boolean(name: &str, value: Value) -> Result<bool> {
    match value {
        Value::Boolean(b) => Ok(b),
        other => Err(mismatch(name, "boolean", &other)),
    }
}

fn decimal(name: &str, value: Value) -> Result<f64> {
    match value {
        Value::Decimal(v) => Ok(v),
        Value::Integer(v) => Ok(v as f64),
        other => Err(mismatch(name, "decimal", &other)),
    }
}

fn depth(name: &str, value: Value) -> Result<u8> {
    match value {
        Value::Integer(v) => u8::try_from(v)
            .map_err(|_| Error::InternalBinding(format!("'{}' out of range: {}", name, v))),
        other => Err(mismatch(name, "integer", &other)),
    }
}

fn directional(name: &str, value: Value) -> Result<DirectionalValue> {
    match value {
        Value::Composite(v) => Ok(v),
        other => Err(mismatch(name, "composite", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use std::fs;

    fn bind(registry: &SymbolRegistry, tokens: &[&str]) -> Result<ResolvedConfiguration> {
        let parsed = Parser::new(registry).parse(tokens);
        assert!(parsed.is_ok(), "unexpected errors: {}", parsed.errors());
        Binder::new(registry).bind(parsed.arguments())
    }

    #[test]
    fn test_defaults_come_from_registry() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "# Doc").unwrap();

        let registry = SymbolRegistry::standard().unwrap();
        let config = bind(&registry, &[input.to_str().unwrap()]).unwrap();

        assert_eq!(config.output_path, dir.path().join("doc.pdf"));
        assert_eq!(config.options.margins.sides(), ["50px"; 4]);
        assert_eq!(config.options.scale, 1.0);
        assert_eq!(config.options.format, PaperFormat::A4);
        assert_eq!(config.options.code_highlight_theme, CodeHighlightTheme::Github);
        assert!(!config.open_after_conversion);
        assert!(config.options.table_of_contents.is_none());
    }

    #[test]
    fn test_header_content_loaded_at_bind_time() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.md");
        let header = dir.path().join("header.html");
        fs::write(&input, "# Doc").unwrap();
        fs::write(&header, "<div>Header</div>").unwrap();

        let registry = SymbolRegistry::standard().unwrap();
        let parsed = Parser::new(&registry).parse([
            input.to_str().unwrap(),
            "-h",
            header.to_str().unwrap(),
        ]);
        assert!(parsed.is_ok());

        // The file vanishes between validation and binding
        fs::remove_file(&header).unwrap();
        let err = Binder::new(&registry).bind(parsed.arguments()).unwrap_err();
        assert!(matches!(err, Error::FileRead { ref path, .. } if path.ends_with("header.html")));
    }

    #[test]
    fn test_unbindable_symbol_is_internal_error() {
        let mut registry = SymbolRegistry::new();
        registry
            .register(Symbol::flag("mystery", &["--mystery"]).with_default("false"))
            .unwrap();
        let err = Binder::new(&registry).bind(&[]).unwrap_err();
        assert!(matches!(err, Error::InternalBinding(_)));
    }

    #[test]
    fn test_unknown_enum_member_is_internal_error() {
        let registry = SymbolRegistry::standard().unwrap();
        let arguments = [
            RawArgument::new(names::INPUT_PATH, Value::String("doc.md".into())),
            RawArgument::new(names::FORMAT, Value::Enum("b5".into())),
        ];

        let err = Binder::new(&registry).bind(&arguments).unwrap_err();
        assert!(
            matches!(err, Error::InternalBinding(ref msg) if msg.contains("'b5'")),
            "{:?}",
            err
        );
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_toc_page_numbers_only_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "# Doc").unwrap();
        let registry = SymbolRegistry::standard().unwrap();

        let config = bind(
            &registry,
            &[input.to_str().unwrap(), "--toc-has-colored-links"],
        )
        .unwrap();
        let toc = config.options.table_of_contents.unwrap();
        assert!(toc.has_colored_links);
        assert!(toc.page_numbers.is_none());

        let config = bind(
            &registry,
            &[input.to_str().unwrap(), "--toc-page-numbers-tab-leader", "Underscore"],
        )
        .unwrap();
        let toc = config.options.table_of_contents.unwrap();
        assert_eq!(toc.page_numbers.unwrap().tab_leader, Leader::Underscore);
        assert_eq!(toc.min_depth, None);
    }
}
