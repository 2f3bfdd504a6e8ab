//! Command-line parsing.
//!
//! The parser walks the tokens once, matches them against the
//! [`SymbolRegistry`], converts and validates each value, and collects every
//! error it meets instead of stopping at the first.

mod options;

pub use options::ParserConfig;

use crate::error::{ArgumentError, ArgumentErrors};
use crate::symbol::{Symbol, SymbolRegistry, Value};

const END_OF_OPTIONS: &str = "--";

/// A matched symbol with its converted value.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArgument {
    symbol: &'static str,
    raw: Option<String>,
    value: Value,
    position: Option<usize>,
}

impl RawArgument {
    /// An already-converted value for a symbol, as if given by name rather
    /// than parsed from a token.
    pub fn new(symbol: &'static str, value: Value) -> Self {
        Self {
            symbol,
            raw: None,
            value,
            position: None,
        }
    }

    /// Canonical name of the matched symbol.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The string supplied on the command line; empty for a bare flag.
    pub fn raw(&self) -> &str {
        self.raw.as_deref().unwrap_or_default()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Index among the positional arguments, if positional.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

/// Everything learned from one pass over the tokens.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    arguments: Vec<RawArgument>,
    present: Vec<&'static str>,
    errors: ArgumentErrors,
}

impl ParseResult {
    /// Arguments that were matched and accepted.
    pub fn arguments(&self) -> &[RawArgument] {
        &self.arguments
    }

    /// The accepted argument for a symbol.
    pub fn get(&self, name: &str) -> Option<&RawArgument> {
        self.arguments.iter().find(|a| a.symbol == name)
    }

    /// Whether a symbol appeared on the command line, valid or not.
    pub fn contains(&self, name: &str) -> bool {
        self.present.iter().any(|p| *p == name)
    }

    /// Names of every symbol that appeared, in order of first appearance.
    pub fn present_symbols(&self) -> &[&'static str] {
        &self.present
    }

    pub fn errors(&self) -> &ArgumentErrors {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accepted arguments, or every collected error.
    pub fn into_result(self) -> Result<Vec<RawArgument>, ArgumentErrors> {
        if self.errors.is_empty() {
            Ok(self.arguments)
        } else {
            Err(self.errors)
        }
    }

    /// Split into accepted arguments and collected errors.
    pub fn into_parts(self) -> (Vec<RawArgument>, ArgumentErrors) {
        (self.arguments, self.errors)
    }

    fn mark_present(&mut self, symbol: &Symbol) -> bool {
        if self.present.contains(&symbol.name()) {
            return false;
        }
        self.present.push(symbol.name());
        true
    }
}

/// Matches command-line tokens against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'r> {
    registry: &'r SymbolRegistry,
    config: ParserConfig,
}

impl<'r> Parser<'r> {
    /// Create a parser with the default configuration.
    pub fn new(registry: &'r SymbolRegistry) -> Self {
        Self::with_config(registry, ParserConfig::default())
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(registry: &'r SymbolRegistry, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the argument vector, excluding the program name.
    pub fn parse<I, S>(&self, tokens: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        let positionals: Vec<&Symbol> = self.registry.positionals().collect();
        let mut result = ParseResult::default();
        let mut next_positional = 0;
        let mut options_ended = false;
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            i += 1;

            if !options_ended && self.config.end_of_options_marker && token == END_OF_OPTIONS {
                options_ended = true;
                continue;
            }

            if !options_ended && is_option_like(token) {
                let (alias, attached) = self.split_attached(token);
                let symbol = match self.find_option(alias) {
                    Ok(symbol) => symbol,
                    Err(_) => {
                        log::debug!("unknown token '{}'", token);
                        result.errors.push(ArgumentError::UnknownSymbol {
                            token: token.clone(),
                        });
                        continue;
                    }
                };

                let first = result.mark_present(symbol);

                if symbol.is_flag() {
                    if !first && attached.is_none() {
                        continue;
                    }
                    match attached {
                        Some(raw) => self.accept(&mut result, symbol, Some(raw), None, first),
                        None => self.accept_flag(&mut result, symbol),
                    }
                    continue;
                }

                let raw = match attached {
                    Some(raw) => Some(raw.to_string()),
                    None => match tokens.get(i) {
                        Some(next) if !self.is_registered_option(next) => {
                            i += 1;
                            Some(next.clone())
                        }
                        _ => None,
                    },
                };

                match raw {
                    Some(raw) => self.accept(&mut result, symbol, Some(raw.as_str()), None, first),
                    None => result.errors.push(ArgumentError::validation(
                        symbol.display_name(),
                        "",
                        "requires a value",
                    )),
                }
                continue;
            }

            match positionals.get(next_positional) {
                Some(symbol) => {
                    result.mark_present(symbol);
                    self.accept(
                        &mut result,
                        symbol,
                        Some(token.as_str()),
                        Some(next_positional),
                        true,
                    );
                    next_positional += 1;
                }
                None => {
                    log::debug!("surplus positional '{}'", token);
                    result.errors.push(ArgumentError::UnknownSymbol {
                        token: token.clone(),
                    });
                }
            }
        }

        for symbol in positionals.iter().skip(next_positional) {
            if symbol.is_required() {
                result.errors.push(ArgumentError::MissingRequiredArgument {
                    name: symbol.name().to_string(),
                });
            }
        }

        log::debug!(
            "parsed {} argument(s) with {} error(s)",
            result.arguments.len(),
            result.errors.len()
        );
        result
    }

    fn accept(
        &self,
        result: &mut ParseResult,
        symbol: &Symbol,
        raw: Option<&str>,
        position: Option<usize>,
        first: bool,
    ) {
        let raw = raw.unwrap_or_default();
        if !first {
            result.errors.push(ArgumentError::validation(
                symbol.display_name(),
                raw,
                "specified more than once",
            ));
            return;
        }

        match symbol.accept(raw) {
            Ok(value) => {
                log::debug!("{} = {:?}", symbol.name(), value);
                result.arguments.push(RawArgument {
                    symbol: symbol.name(),
                    raw: Some(raw.to_string()),
                    value,
                    position,
                });
            }
            Err(err) => result.errors.push(err),
        }
    }

    fn accept_flag(&self, result: &mut ParseResult, symbol: &Symbol) {
        log::debug!("{} = true", symbol.name());
        result.arguments.push(RawArgument {
            symbol: symbol.name(),
            raw: None,
            value: Value::Boolean(true),
            position: None,
        });
    }

    fn find_option(&self, alias: &str) -> Result<&'r Symbol, ArgumentError> {
        if self.config.case_sensitive {
            self.registry.lookup(alias)
        } else {
            self.registry.lookup_ignore_case(alias)
        }
    }

    fn is_registered_option(&self, token: &str) -> bool {
        if !is_option_like(token) {
            return false;
        }
        let (alias, _) = self.split_attached(token);
        self.find_option(alias).is_ok()
    }

    fn split_attached<'t>(&self, token: &'t str) -> (&'t str, Option<&'t str>) {
        if !self.config.allow_attached_values {
            return (token, None);
        }
        match token.find(['=', ':']) {
            Some(idx) => (&token[..idx], Some(&token[idx + 1..])),
            None => (token, None),
        }
    }
}

fn is_option_like(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Arity, ValueType};

    fn registry() -> SymbolRegistry {
        let mut registry = SymbolRegistry::new();
        registry
            .register(Symbol::argument("first", Arity::ExactlyOne))
            .unwrap();
        registry
            .register(Symbol::argument("second", Arity::ZeroOrOne))
            .unwrap();
        registry
            .register(Symbol::flag("verbose", &["-v", "--verbose"]))
            .unwrap();
        registry
            .register(Symbol::option("level", &["-n", "--level"], ValueType::Integer))
            .unwrap();
        registry
    }

    #[test]
    fn test_positionals_in_order() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "b"]);
        assert!(result.is_ok());
        assert_eq!(result.get("first").unwrap().raw(), "a");
        assert_eq!(result.get("second").unwrap().position(), Some(1));
    }

    #[test]
    fn test_optional_positional_may_be_absent() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a"]);
        assert!(result.is_ok());
        assert!(result.get("second").is_none());
    }

    #[test]
    fn test_flag_presence_means_true() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "-v"]);
        assert_eq!(result.get("verbose").unwrap().value(), &Value::Boolean(true));
        assert_eq!(result.get("verbose").unwrap().raw(), "");
    }

    #[test]
    fn test_option_consumes_next_token() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["--level", "3", "a"]);
        assert!(result.is_ok());
        assert_eq!(result.get("level").unwrap().value(), &Value::Integer(3));
        assert_eq!(result.get("first").unwrap().raw(), "a");
    }

    #[test]
    fn test_attached_values() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "--level=4", "-v:false"]);
        assert!(result.is_ok());
        assert_eq!(result.get("level").unwrap().value(), &Value::Integer(4));
        assert_eq!(result.get("verbose").unwrap().value(), &Value::Boolean(false));

        let config = ParserConfig::new().with_attached_values(false);
        let result = Parser::with_config(&registry, config).parse(["a", "--level=4"]);
        assert!(matches!(
            result.errors().iter().next(),
            Some(ArgumentError::UnknownSymbol { token }) if token == "--level=4"
        ));
    }

    #[test]
    fn test_missing_value_before_next_option() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "--level", "-v"]);
        assert_eq!(result.errors().len(), 1);
        assert!(result.contains("verbose"));
        assert!(result.get("level").is_none());
    }

    #[test]
    fn test_duplicate_option_is_reported() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "-n", "1", "-n", "2"]);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.get("level").unwrap().value(), &Value::Integer(1));

        // Repeating a bare flag is harmless
        let result = Parser::new(&registry).parse(["a", "-v", "-v"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_end_of_options_marker() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["--", "-v"]);
        assert!(result.is_ok());
        assert_eq!(result.get("first").unwrap().raw(), "-v");
        assert!(!result.contains("verbose"));
    }

    #[test]
    fn test_case_insensitive_config() {
        let registry = registry();
        let strict = Parser::new(&registry).parse(["a", "--VERBOSE"]);
        assert_eq!(strict.errors().len(), 1);

        let config = ParserConfig::new().case_insensitive();
        let relaxed = Parser::with_config(&registry, config).parse(["a", "--VERBOSE"]);
        assert!(relaxed.is_ok());
        assert!(relaxed.contains("verbose"));
    }

    #[test]
    fn test_all_errors_collected() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["--bogus", "-n", "x", "--other"]);
        let errors: Vec<_> = result.errors().iter().cloned().collect();
        assert_eq!(errors.len(), 4);
        assert!(matches!(&errors[0], ArgumentError::UnknownSymbol { token } if token == "--bogus"));
        assert!(matches!(&errors[1], ArgumentError::Validation { symbol, .. } if symbol == "--level"));
        assert!(matches!(&errors[2], ArgumentError::UnknownSymbol { token } if token == "--other"));
        assert!(matches!(&errors[3], ArgumentError::MissingRequiredArgument { name } if name == "first"));
    }

    #[test]
    fn test_into_result() {
        let registry = registry();
        let arguments = Parser::new(&registry).parse(["a", "-v"]).into_result().unwrap();
        assert_eq!(arguments.len(), 2);

        let errors = Parser::new(&registry).parse(["-x"]).into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_surplus_positional() {
        let registry = registry();
        let result = Parser::new(&registry).parse(["a", "b", "c"]);
        assert!(matches!(
            result.errors().iter().next(),
            Some(ArgumentError::UnknownSymbol { token }) if token == "c"
        ));
    }
}
