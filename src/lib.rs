//! # mdpdf
//!
//! Argument resolution for a markdown to PDF converter.
//!
//! This library turns the untyped command line of `mdpdf` into a validated
//! [`ResolvedConfiguration`] for the conversion engine. The engine itself
//! sits behind the [`Converter`] trait.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdpdf::{Resolver, SymbolRegistry};
//!
//! fn main() -> mdpdf::Result<()> {
//!     let registry = SymbolRegistry::standard()?;
//!     let config = Resolver::standard(&registry).resolve(["README.md", "-m", "10px,20px"])?;
//!
//!     println!("{}", config.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parser**: matches tokens against the [`SymbolRegistry`], converting
//!   and validating every value
//! - **Exclusion**: `-y` forbids every other option except `-o`
//! - **Binder**: applies declared defaults, loads header and footer content,
//!   creates the table of contents only when one of its options was given
//!
//! Every user error found along the way is reported at once.

pub mod bind;
pub mod config;
pub mod convert;
pub mod error;
pub mod exclusion;
pub mod parser;
pub mod resolve;
pub mod shorthand;
pub mod symbol;
pub mod validate;

// Re-export commonly used types
pub use bind::{Binder, ConfigurationBuilder};
pub use config::{
    CodeHighlightTheme, ConverterOptions, Leader, ListStyle, PageNumberOptions, PaperFormat,
    PredefinedTheme, ResolvedConfiguration, TableOfContents, Theme,
};
pub use convert::{default_output_path, Converter, PDF_EXTENSION};
pub use error::{ArgumentError, ArgumentErrors, Error, Result};
pub use exclusion::ExclusionRule;
pub use parser::{ParseResult, Parser, ParserConfig, RawArgument};
pub use resolve::Resolver;
pub use shorthand::{DirectionalValue, ShorthandError};
pub use symbol::{Arity, EnumCatalog, Symbol, SymbolRegistry, Value, ValueType};
pub use validate::{OrderRule, Validator};

/// Resolve an argument vector with the standard registry and rules.
///
/// # Arguments
///
/// * `tokens` - Process arguments, excluding the program name
///
/// # Example
///
/// ```no_run
/// let config = mdpdf::resolve_args(["notes.md", "--format", "Letter"]).unwrap();
/// assert_eq!(config.options.format, mdpdf::PaperFormat::Letter);
/// ```
pub fn resolve_args<I, S>(tokens: I) -> Result<ResolvedConfiguration>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let registry = SymbolRegistry::standard()?;
    Resolver::standard(&registry).resolve(tokens)
}
