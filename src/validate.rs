//! Value validators.
//!
//! Apart from the file-existence check these are pure functions. Each
//! returns a human-readable reason on failure; the caller attaches the
//! symbol and the offending value.

use crate::error::ArgumentError;
use crate::parser::ParseResult;
use crate::symbol::{EnumCatalog, SymbolRegistry, Value};
use std::path::{Path, PathBuf};

/// A check attached to a symbol, run on every value it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validator {
    /// The value is a path to an existing file.
    FileExists,
    /// The numeric value lies within `low..=high`.
    InBounds { low: f64, high: f64 },
}

impl Validator {
    /// Check a converted value.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match (self, value) {
            (Validator::FileExists, Value::String(path)) => file_exists(path),
            (Validator::InBounds { low, high }, value) => {
                in_bounds(value.as_number(), *low, *high)
            }
            (Validator::FileExists, other) => Err(format!(
                "expected a path, got a {} value",
                other.type_name()
            )),
        }
    }
}

/// Make a path absolute against the current directory.
pub fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Fails unless `path` refers to an existing file.
pub fn file_exists(path: &str) -> Result<(), String> {
    let full = absolute(Path::new(path));
    if full.is_file() {
        Ok(())
    } else {
        Err(format!("File '{}' does not exist", full.display()))
    }
}

/// Fails if `value` is outside `low..=high`. An absent value passes.
pub fn in_bounds(value: Option<f64>, low: f64, high: f64) -> Result<(), String> {
    match value {
        Some(v) if v < low || v > high => Err(format!(
            "must be between {} and {}",
            low, high
        )),
        _ => Ok(()),
    }
}

/// Match `token` against the members of an enumeration, ignoring case.
///
/// Returns the canonical member name, or a reason listing the valid members.
pub fn is_enum_member<'c>(token: &str, catalog: &'c EnumCatalog) -> Result<&'c str, String> {
    catalog.find(token).ok_or_else(|| {
        format!(
            "not a valid {}. Valid values are: {}",
            catalog.type_name(),
            catalog.members().join(", ")
        )
    })
}

/// Two numeric symbols where the first must not exceed the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRule {
    lower: &'static str,
    upper: &'static str,
}

impl OrderRule {
    pub fn new(lower: &'static str, upper: &'static str) -> Self {
        Self { lower, upper }
    }

    /// Check both symbols when both are present; the error names the upper one.
    pub fn check(&self, registry: &SymbolRegistry, parsed: &ParseResult) -> Option<ArgumentError> {
        let lower = parsed.get(self.lower)?;
        let upper = parsed.get(self.upper)?;
        let (low, high) = (lower.value().as_number()?, upper.value().as_number()?);
        if low <= high {
            return None;
        }

        let display = |name: &'static str| {
            registry
                .get(name)
                .map(|s| s.display_name())
                .unwrap_or(name)
        };
        Some(ArgumentError::validation(
            display(self.upper),
            upper.raw(),
            format!(
                "must not be less than {} ({})",
                display(self.lower),
                lower.raw()
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaperFormat;
    use std::fs;

    #[test]
    fn test_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "# Title").unwrap();

        assert!(file_exists(file.to_str().unwrap()).is_ok());
        assert!(file_exists(dir.path().join("missing.md").to_str().unwrap()).is_err());
        // Directories are not files
        assert!(file_exists(dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_in_bounds_is_inclusive() {
        assert!(in_bounds(Some(0.1), 0.1, 2.0).is_ok());
        assert!(in_bounds(Some(2.0), 0.1, 2.0).is_ok());
        assert!(in_bounds(Some(0.09999), 0.1, 2.0).is_err());
        assert!(in_bounds(Some(2.00001), 0.1, 2.0).is_err());
        assert!(in_bounds(None, 0.1, 2.0).is_ok());
    }

    #[test]
    fn test_enum_member_lists_valid_values() {
        let catalog = EnumCatalog::of::<PaperFormat>();
        assert_eq!(is_enum_member("a5", &catalog), Ok("a5"));

        let reason = is_enum_member("A9", &catalog).unwrap_err();
        assert!(reason.contains("PaperFormat"));
        assert!(reason.contains("letter, legal, tabloid"));
    }

    #[test]
    fn test_validator_check() {
        let bounds = Validator::InBounds { low: 1.0, high: 6.0 };
        assert!(bounds.check(&Value::Integer(6)).is_ok());
        assert!(bounds.check(&Value::Integer(7)).is_err());
        assert!(bounds.check(&Value::String("x".into())).is_ok());
        assert!(Validator::FileExists.check(&Value::Integer(1)).is_err());
    }
}
