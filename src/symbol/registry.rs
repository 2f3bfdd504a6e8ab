//! The catalog of every recognized symbol.

use super::{EnumCatalog, Symbol, ValueType};
use crate::error::{ArgumentError, Error, Result};
use clap::ValueEnum;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};

/// All declared symbols, looked up by name or alias.
///
/// Built once at start-up. Every method other than [`register`](Self::register)
/// takes `&self`, so a finished registry can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    symbols: Vec<Symbol>,
    by_name: HashMap<&'static str, usize>,
    by_alias: HashMap<&'static str, usize>,
    by_folded_alias: HashMap<String, usize>,
    catalogs: HashMap<TypeId, EnumCatalog>,
}

impl SymbolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol.
    ///
    /// Fails if its name or any alias collides with a name or alias that is
    /// already registered, including aliases that differ only in case. An
    /// option must declare at least one alias and no alias twice. A failed
    /// registration leaves the registry as it was.
    pub fn register(&mut self, symbol: Symbol) -> Result<()> {
        Self::check_aliases(&symbol)?;

        let mut keys = vec![symbol.name()];
        keys.extend(symbol.aliases().iter().copied().filter(|a| *a != symbol.name()));

        if let Some(taken) = keys.iter().find(|k| self.is_taken(k)) {
            return Err(Error::DuplicateSymbol(taken.to_string()));
        }
        if !symbol.is_positional() {
            if let Some(clash) = symbol
                .aliases()
                .iter()
                .find(|a| self.by_folded_alias.contains_key(&a.to_lowercase()))
            {
                return Err(Error::DuplicateSymbol(clash.to_string()));
            }
        }

        let index = self.symbols.len();
        self.by_name.insert(symbol.name(), index);
        if !symbol.is_positional() {
            for &alias in symbol.aliases() {
                self.by_alias.insert(alias, index);
                self.by_folded_alias.insert(alias.to_lowercase(), index);
            }
        }
        if let ValueType::Enum(catalog) = symbol.value_type() {
            self.catalogs
                .entry(catalog.type_id())
                .or_insert_with(|| catalog.clone());
        }

        log::trace!("registered symbol '{}'", symbol.name());
        self.symbols.push(symbol);
        Ok(())
    }

    fn check_aliases(symbol: &Symbol) -> Result<()> {
        if symbol.is_positional() {
            return Ok(());
        }
        if symbol.aliases().is_empty() {
            return Err(Error::InvalidSymbol(format!(
                "option '{}' declares no alias",
                symbol.name()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(repeated) = symbol.aliases().iter().find(|a| !seen.insert(**a)) {
            return Err(Error::InvalidSymbol(format!(
                "option '{}' declares alias '{}' twice",
                symbol.name(),
                repeated
            )));
        }
        Ok(())
    }

    fn is_taken(&self, key: &str) -> bool {
        self.by_name.contains_key(key) || self.by_alias.contains_key(key)
    }

    /// Find the option matching `token` exactly.
    pub fn lookup(&self, token: &str) -> std::result::Result<&Symbol, ArgumentError> {
        self.by_alias
            .get(token)
            .map(|&i| &self.symbols[i])
            .ok_or_else(|| ArgumentError::UnknownSymbol {
                token: token.to_string(),
            })
    }

    /// Find the option matching `token`, ignoring case.
    pub fn lookup_ignore_case(&self, token: &str) -> std::result::Result<&Symbol, ArgumentError> {
        self.by_folded_alias
            .get(&token.to_lowercase())
            .map(|&i| &self.symbols[i])
            .ok_or_else(|| ArgumentError::UnknownSymbol {
                token: token.to_string(),
            })
    }

    /// Whether `token` is an alias of some option.
    pub fn is_alias(&self, token: &str) -> bool {
        self.by_alias.contains_key(token)
    }

    /// Get a symbol by canonical name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&i| &self.symbols[i])
    }

    /// All symbols in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Positional arguments in declaration order.
    pub fn positionals(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| s.is_positional())
    }

    /// Options and flags in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| !s.is_positional())
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Valid values of an enum-typed symbol.
    pub fn allowed_values(&self, name: &str) -> Option<&[String]> {
        self.get(name)?.allowed_values()
    }

    /// The catalog registered for enumeration type `E`.
    pub fn catalog<E: ValueEnum + 'static>(&self) -> Option<&EnumCatalog> {
        self.catalogs.get(&TypeId::of::<E>())
    }

    /// Resolve a token to a member of `E` through its registered catalog.
    ///
    /// Returns `None` when `E` has no catalog here or the token matches no
    /// member.
    pub fn resolve_enum<E: ValueEnum + 'static>(&self, token: &str) -> Option<E> {
        let catalog = self.catalog::<E>()?;
        let name = catalog.find(token)?;
        catalog.variant::<E>(name)
    }
}
