//! Integration tests for the symbol registry.

use clap::ValueEnum;
use mdpdf::symbol::names;
use mdpdf::{
    ArgumentError, Arity, EnumCatalog, Error, Parser, Symbol, SymbolRegistry, Validator, Value,
    ValueType,
};

/// An enumeration that exists only in this test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shade {
    Light,
    Dark,
    Sepia,
}

fn shade_registry() -> SymbolRegistry {
    let mut registry = SymbolRegistry::new();
    registry
        .register(Symbol::option(
            "shade",
            &["--shade"],
            ValueType::Enum(EnumCatalog::of::<Shade>()),
        ))
        .unwrap();
    registry
}

#[test]
fn test_allowed_values_come_from_the_enum() {
    let registry = shade_registry();
    assert_eq!(
        registry.allowed_values("shade").unwrap(),
        &["light", "dark", "sepia"]
    );
}

#[test]
fn test_every_member_is_accepted() {
    let registry = shade_registry();
    for shade in Shade::value_variants() {
        let name = shade.to_possible_value().unwrap().get_name().to_uppercase();
        let result = Parser::new(&registry).parse(["--shade", name.as_str()]);
        assert!(result.is_ok(), "{} rejected", name);
        assert_eq!(
            registry.resolve_enum::<Shade>(&name),
            Some(*shade)
        );
    }

    let result = Parser::new(&registry).parse(["--shade", "neon"]);
    assert!(matches!(
        result.errors().iter().next(),
        Some(ArgumentError::Validation { symbol, value, .. }) if symbol == "--shade" && value == "neon"
    ));
}

#[test]
fn test_duplicate_names_and_aliases() {
    let mut registry = SymbolRegistry::standard().unwrap();

    let err = registry
        .register(Symbol::flag("help", &["-h"]))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateSymbol(ref a) if a == "-h"));

    let err = registry
        .register(Symbol::option(names::SCALE, &["--zoom"], ValueType::Decimal))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateSymbol(ref a) if a == "scale"));
}

#[test]
fn test_lookup_unknown_token() {
    let registry = SymbolRegistry::standard().unwrap();
    assert_eq!(registry.lookup("-s").unwrap().name(), names::SCALE);
    assert_eq!(
        registry.lookup("--bogus-flag").unwrap_err(),
        ArgumentError::UnknownSymbol {
            token: "--bogus-flag".into()
        }
    );
}

#[test]
fn test_standard_declarations() {
    let registry = SymbolRegistry::standard().unwrap();

    let input = registry.get(names::INPUT_PATH).unwrap();
    assert_eq!(input.arity(), Arity::ExactlyOne);
    assert!(input.validators().contains(&Validator::FileExists));

    let output = registry.get(names::OUTPUT_PATH).unwrap();
    assert_eq!(output.arity(), Arity::ZeroOrOne);

    let margins = registry.get(names::MARGINS).unwrap();
    assert_eq!(margins.value_type(), &ValueType::Composite);
    assert_eq!(margins.default_value(), Some("50px"));

    let scale = registry.get(names::SCALE).unwrap();
    assert_eq!(scale.accept("0.1"), Ok(Value::Decimal(0.1)));
    assert!(scale.accept("0.09999").is_err());

    let landscape = registry.get(names::IS_LANDSCAPE).unwrap();
    assert!(landscape.is_flag());
    assert_eq!(landscape.aliases(), &["-l", "--is-landscape"]);
}
