//! Symbols: the declared arguments and options of the command line.
//!
//! A [`Symbol`] describes one recognizable input: its aliases, how many
//! values it takes, the type those values convert to, its default and the
//! validators a value must pass. Symbols are collected in a
//! [`SymbolRegistry`], which is built once and only read afterwards.

mod catalog;
mod help;
mod registry;
mod standard;

pub use catalog::EnumCatalog;
pub use registry::SymbolRegistry;
pub use standard::names;

use crate::error::ArgumentError;
use crate::shorthand::DirectionalValue;
use crate::validate::{self, Validator};

/// How many values a symbol takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one value. Required when positional.
    ExactlyOne,
    /// At most one value. Positional symbols with this arity are optional.
    ZeroOrOne,
    /// No value: presence means `true`.
    BooleanFlag,
}

/// Declared value type of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueType {
    String,
    Integer,
    Decimal,
    Boolean,
    /// One member of a closed enumeration.
    Enum(EnumCatalog),
    /// A four-sided shorthand such as margins.
    Composite,
}

impl ValueType {
    /// Placeholder shown in the usage listing.
    pub fn hint(&self) -> &'static str {
        match self {
            ValueType::String => "<value>",
            ValueType::Integer => "<integer>",
            ValueType::Decimal => "<decimal>",
            ValueType::Boolean => "<bool>",
            ValueType::Enum(_) => "<name>",
            ValueType::Composite => "<top,right,bottom,left>",
        }
    }

    /// Convert a raw command-line string into a typed value.
    pub fn convert(&self, symbol: &str, raw: &str) -> Result<Value, ArgumentError> {
        match self {
            ValueType::String => Ok(Value::String(raw.to_string())),
            ValueType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ArgumentError::validation(symbol, raw, "not a valid integer")),
            ValueType::Decimal => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Value::Decimal(v)),
                _ => Err(ArgumentError::validation(symbol, raw, "not a valid decimal")),
            },
            ValueType::Boolean => parse_bool(raw)
                .map(Value::Boolean)
                .ok_or_else(|| ArgumentError::validation(symbol, raw, "expected 'true' or 'false'")),
            ValueType::Enum(catalog) => validate::is_enum_member(raw, catalog)
                .map(|name| Value::Enum(name.to_string()))
                .map_err(|reason| ArgumentError::validation(symbol, raw, reason)),
            ValueType::Composite => DirectionalValue::parse(raw)
                .map(Value::Composite)
                .map_err(|e| ArgumentError::InvalidShorthand {
                    symbol: symbol.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// A converted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    /// Canonical member name as listed by the enum catalog.
    Enum(String),
    Composite(DirectionalValue),
}

impl Value {
    /// Numeric view used by bounds checks.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Boolean(_) => "boolean",
            Value::Enum(_) => "enum",
            Value::Composite(_) => "composite",
        }
    }
}

/// One declared argument or option.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: &'static str,
    aliases: Vec<&'static str>,
    positional: bool,
    arity: Arity,
    value_type: ValueType,
    default: Option<&'static str>,
    validators: Vec<Validator>,
    description: &'static str,
}

impl Symbol {
    /// Declare a positional argument. Its only alias is its name.
    pub fn argument(name: &'static str, arity: Arity) -> Self {
        Self {
            name,
            aliases: vec![name],
            positional: true,
            arity,
            value_type: ValueType::String,
            default: None,
            validators: Vec::new(),
            description: "",
        }
    }

    /// Declare an option that takes one value.
    pub fn option(name: &'static str, aliases: &[&'static str], value_type: ValueType) -> Self {
        Self {
            name,
            aliases: aliases.to_vec(),
            positional: false,
            arity: Arity::ExactlyOne,
            value_type,
            default: None,
            validators: Vec::new(),
            description: "",
        }
    }

    /// Declare a boolean flag.
    pub fn flag(name: &'static str, aliases: &[&'static str]) -> Self {
        Self {
            name,
            aliases: aliases.to_vec(),
            positional: false,
            arity: Arity::BooleanFlag,
            value_type: ValueType::Boolean,
            default: None,
            validators: Vec::new(),
            description: "",
        }
    }

    /// Set the value used when the symbol is absent.
    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Add a validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Set the help description.
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All aliases, in declaration order.
    pub fn aliases(&self) -> &[&'static str] {
        &self.aliases
    }

    /// Name used in messages: the longest alias for options, the name for
    /// positional arguments.
    pub fn display_name(&self) -> &'static str {
        if self.positional {
            return self.name;
        }
        self.aliases
            .iter()
            .copied()
            .max_by_key(|a| a.len())
            .unwrap_or(self.name)
    }

    pub fn is_positional(&self) -> bool {
        self.positional
    }

    pub fn is_flag(&self) -> bool {
        self.arity == Arity::BooleanFlag
    }

    /// Whether the symbol must appear on the command line.
    pub fn is_required(&self) -> bool {
        self.positional && self.arity == Arity::ExactlyOne
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn default_value(&self) -> Option<&'static str> {
        self.default
    }

    /// Valid values, for enum-typed symbols.
    pub fn allowed_values(&self) -> Option<&[String]> {
        match &self.value_type {
            ValueType::Enum(catalog) => Some(catalog.members()),
            _ => None,
        }
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Convert a raw string and run it through every validator.
    pub fn accept(&self, raw: &str) -> Result<Value, ArgumentError> {
        let value = self.value_type.convert(self.display_name(), raw)?;
        for validator in &self.validators {
            validator
                .check(&value)
                .map_err(|reason| ArgumentError::validation(self.display_name(), raw, reason))?;
        }
        Ok(value)
    }
}
