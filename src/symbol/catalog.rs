//! Member lists of closed enumerations.

use clap::ValueEnum;
use std::any::{type_name, TypeId};

/// The ordered member names of one enumeration type.
///
/// Computed from the type's `ValueEnum` implementation, so adding a variant
/// makes it acceptable everywhere the catalog is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCatalog {
    type_id: TypeId,
    type_name: &'static str,
    members: Vec<String>,
}

impl EnumCatalog {
    /// Build the catalog for `E`.
    pub fn of<E: ValueEnum + 'static>() -> Self {
        let members = E::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .filter(|pv| !pv.is_hide_set())
            .map(|pv| pv.get_name().to_string())
            .collect();

        Self {
            type_id: TypeId::of::<E>(),
            type_name: short_type_name(type_name::<E>()),
            members,
        }
    }

    /// Identity of the enumeration type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Unqualified type name, e.g. `PaperFormat`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Member names in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Find the canonical member name matching `token`, ignoring case.
    pub fn find(&self, token: &str) -> Option<&str> {
        let token = token.trim();
        self.members
            .iter()
            .find(|m| m.eq_ignore_ascii_case(token))
            .map(String::as_str)
    }

    /// Map a canonical member name back to its variant.
    pub fn variant<E: ValueEnum + 'static>(&self, name: &str) -> Option<E> {
        if self.type_id != TypeId::of::<E>() {
            return None;
        }
        E::value_variants()
            .iter()
            .find(|v| {
                v.to_possible_value()
                    .map_or(false, |pv| pv.get_name() == name)
            })
            .cloned()
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
