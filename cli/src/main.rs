//! mdpdf CLI - markdown to PDF conversion tool

mod engine;
mod open;

use std::fs;
use std::process;

use colored::Colorize;

use mdpdf::{Error, Resolver, SymbolRegistry};

use crate::engine::EngineConverter;

const HELP_TOKENS: [&str; 2] = ["--help", "-?"];
const VERSION_TOKEN: &str = "--version";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        report(&e);
        process::exit(exit_code(&e));
    }
}

fn run(args: &[String]) -> mdpdf::Result<()> {
    let registry = SymbolRegistry::standard()?;

    if wants(&registry, args, &HELP_TOKENS) {
        print!("{}", registry.usage("mdpdf"));
        return Ok(());
    }
    if wants(&registry, args, &[VERSION_TOKEN]) {
        cmd_version();
        return Ok(());
    }

    let config = Resolver::standard(&registry).resolve(args)?;
    log::debug!("resolved configuration: {}", config.to_json(false)?);

    println!("{}", "Converting markdown to pdf...".cyan());
    let engine = EngineConverter::from_env();
    let pdf = mdpdf::convert::convert(&config, &engine)?;
    fs::write(&config.output_path, &pdf)?;

    println!(
        "{} {}",
        "Generated pdf at:".green(),
        config.output_path.display()
    );

    if config.open_after_conversion {
        open::open(&config.output_path);
    }

    Ok(())
}

/// Whether any of `tokens` appears in option position before the
/// end-of-options marker. The value following a value-taking option is
/// skipped.
fn wants(registry: &SymbolRegistry, args: &[String], tokens: &[&str]) -> bool {
    let mut args = args.iter().map(String::as_str);
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if tokens.iter().any(|t| *t == arg) {
            return true;
        }
        if registry.lookup(arg).map_or(false, |s| !s.is_flag()) {
            args.next();
        }
    }
    false
}

fn report(error: &Error) {
    match error {
        Error::Arguments(errors) => {
            for e in errors {
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
            eprintln!("Run 'mdpdf --help' for usage.");
        }
        other => eprintln!("{}: {}", "Error".red().bold(), other),
    }
}

fn exit_code(error: &Error) -> i32 {
    if error.is_user_error() {
        1
    } else {
        2
    }
}

fn cmd_version() {
    println!("{} {}", "mdpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to PDF conversion tool");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_help_detection_stops_at_marker() {
        let registry = SymbolRegistry::standard().unwrap();
        assert!(wants(&registry, &args(&["doc.md", "--help"]), &HELP_TOKENS));
        assert!(wants(&registry, &args(&["-?"]), &HELP_TOKENS));
        assert!(!wants(&registry, &args(&["--", "--help"]), &HELP_TOKENS));
        // -h is the header path, not help
        assert!(!wants(&registry, &args(&["doc.md", "-h", "header.html"]), &HELP_TOKENS));
    }

    #[test]
    fn test_help_token_as_option_value_is_not_help() {
        let registry = SymbolRegistry::standard().unwrap();
        assert!(!wants(
            &registry,
            &args(&["doc.md", "--document-title", "--help"]),
            &HELP_TOKENS
        ));
        assert!(!wants(
            &registry,
            &args(&["doc.md", "--metadata-title", "--version"]),
            &[VERSION_TOKEN]
        ));
        // a flag takes no value, so the next token is still in option position
        assert!(wants(&registry, &args(&["doc.md", "-k", "--help"]), &HELP_TOKENS));
        assert!(wants(
            &registry,
            &args(&["doc.md", "--scale", "1.5", "--version"]),
            &[VERSION_TOKEN]
        ));
    }

    #[test]
    fn test_exit_codes() {
        let user = Error::from(mdpdf::ArgumentError::UnknownSymbol {
            token: "--bogus-flag".into(),
        });
        assert_eq!(exit_code(&user), 1);
        assert_eq!(exit_code(&Error::InternalBinding("x".into())), 2);
    }
}
