//! Mutual exclusion between an option and everything else.

use crate::error::ArgumentError;
use crate::symbol::{names, SymbolRegistry};

/// An option that, when present, forbids every other option except an
/// allow-list.
///
/// Positional arguments are never affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    exclusive: &'static str,
    allowed: Vec<&'static str>,
}

impl ExclusionRule {
    pub fn new(exclusive: &'static str, allowed: &[&'static str]) -> Self {
        Self {
            exclusive,
            allowed: allowed.to_vec(),
        }
    }

    /// Reading options from front matter only combines with opening the
    /// result afterwards.
    pub fn front_matter() -> Self {
        Self::new(names::FROM_FRONT_MATTER, &[names::OPEN_AFTER_CONVERSION])
    }

    pub fn exclusive(&self) -> &'static str {
        self.exclusive
    }

    pub fn allowed(&self) -> &[&'static str] {
        &self.allowed
    }

    /// One conflict per present option outside the allow-list. No-op when
    /// the exclusive option is absent.
    pub fn check(&self, registry: &SymbolRegistry, present: &[&str]) -> Vec<ArgumentError> {
        if !present.contains(&self.exclusive) {
            return Vec::new();
        }

        let exclusive = registry
            .get(self.exclusive)
            .map(|s| s.display_name())
            .unwrap_or(self.exclusive);

        present
            .iter()
            .filter(|name| **name != self.exclusive && !self.allowed.iter().any(|a| *a == **name))
            .filter_map(|name| registry.get(name))
            .filter(|symbol| !symbol.is_positional())
            .map(|symbol| ArgumentError::ConflictingOption {
                exclusive: exclusive.to_string(),
                option: symbol.display_name().to_string(),
            })
            .collect()
    }
}
