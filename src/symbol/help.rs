//! Usage listing generated from the registry.

use super::{Symbol, SymbolRegistry, ValueType};
use std::fmt::Write;

impl SymbolRegistry {
    /// Render a usage text listing every symbol.
    pub fn usage(&self, program: &str) -> String {
        let mut out = String::new();

        let mut synopsis = vec![program.to_string()];
        for arg in self.positionals() {
            if arg.is_required() {
                synopsis.push(format!("<{}>", arg.name()));
            } else {
                synopsis.push(format!("[{}]", arg.name()));
            }
        }
        synopsis.push("[options]".to_string());
        let _ = writeln!(out, "Usage:\n  {}\n", synopsis.join(" "));

        let _ = writeln!(out, "Arguments:");
        for arg in self.positionals() {
            let _ = writeln!(out, "  {:<40}{}", format!("<{}>", arg.name()), arg.description());
        }

        let _ = writeln!(out, "\nOptions:");
        for option in self.options() {
            let _ = writeln!(out, "  {:<40}{}", option_label(option), describe(option));
        }
        let _ = writeln!(out, "  {:<40}Show help and usage information", "-?, --help");
        let _ = writeln!(out, "  {:<40}Show version information", "--version");

        out
    }
}

fn option_label(symbol: &Symbol) -> String {
    let aliases = symbol.aliases().join(", ");
    if symbol.is_flag() {
        aliases
    } else {
        format!("{} {}", aliases, symbol.value_type().hint())
    }
}

fn describe(symbol: &Symbol) -> String {
    let mut text = symbol.description().to_string();
    if let ValueType::Enum(catalog) = symbol.value_type() {
        let _ = write!(text, " Valid values: {}.", catalog.members().join(", "));
    }
    if let Some(default) = symbol.default_value() {
        if !symbol.is_flag() {
            let _ = write!(text, " [default: {}]", default);
        }
    }
    text
}
