//! The full pipeline from tokens to a [`ResolvedConfiguration`].

use crate::bind::Binder;
use crate::config::ResolvedConfiguration;
use crate::error::{ArgumentErrors, Result};
use crate::exclusion::ExclusionRule;
use crate::parser::{ParseResult, Parser, ParserConfig};
use crate::symbol::{names, SymbolRegistry};
use crate::validate::OrderRule;

/// Parses, checks and binds one invocation.
///
/// User errors from parsing, exclusion and ordering are gathered into a
/// single [`Error::Arguments`](crate::Error::Arguments); binding only starts
/// when there are none.
#[derive(Debug, Clone)]
pub struct Resolver<'r> {
    registry: &'r SymbolRegistry,
    parser_config: ParserConfig,
    exclusions: Vec<ExclusionRule>,
    orderings: Vec<OrderRule>,
}

impl<'r> Resolver<'r> {
    /// A resolver with no cross-symbol rules.
    pub fn new(registry: &'r SymbolRegistry) -> Self {
        Self {
            registry,
            parser_config: ParserConfig::default(),
            exclusions: Vec::new(),
            orderings: Vec::new(),
        }
    }

    /// A resolver with the rules of the `mdpdf` command line.
    pub fn standard(registry: &'r SymbolRegistry) -> Self {
        Self::new(registry)
            .with_exclusion(ExclusionRule::front_matter())
            .with_ordering(OrderRule::new(names::TOC_MIN_DEPTH, names::TOC_MAX_DEPTH))
    }

    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser_config = config;
        self
    }

    pub fn with_exclusion(mut self, rule: ExclusionRule) -> Self {
        self.exclusions.push(rule);
        self
    }

    pub fn with_ordering(mut self, rule: OrderRule) -> Self {
        self.orderings.push(rule);
        self
    }

    /// Parse the tokens and run every cross-symbol check.
    ///
    /// Returns the parse result together with all errors found.
    pub fn check<I, S>(&self, tokens: I) -> (ParseResult, ArgumentErrors)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = Parser::with_config(self.registry, self.parser_config).parse(tokens);
        let mut errors = parsed.errors().clone();

        for rule in &self.exclusions {
            errors.extend(rule.check(self.registry, parsed.present_symbols()));
        }
        for rule in &self.orderings {
            errors.extend(rule.check(self.registry, &parsed));
        }

        (parsed, errors)
    }

    /// Resolve the tokens into a configuration.
    pub fn resolve<I, S>(&self, tokens: I) -> Result<ResolvedConfiguration>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (parsed, errors) = self.check(tokens);
        if !errors.is_empty() {
            log::debug!("{} argument error(s), not binding", errors.len());
        }
        errors.into_result()?;

        Binder::new(self.registry).bind(parsed.arguments())
    }
}
