//! Document themes: a predefined style sheet or a custom one.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Style sheets shipped with the conversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredefinedTheme {
    #[default]
    Github,
    Latex,
    None,
}

/// Theme applied to the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Theme {
    Predefined(PredefinedTheme),
    /// Path to a custom CSS file, used verbatim.
    Custom(String),
}

impl Theme {
    /// Resolve a theme name, falling back to a custom path.
    ///
    /// Never fails: anything that is not a predefined name is taken as a
    /// path to a style sheet.
    pub fn resolve(value: &str) -> Self {
        match PredefinedTheme::from_str(value, true) {
            Ok(theme) => Theme::Predefined(theme),
            Err(_) => Theme::Custom(value.to_string()),
        }
    }

    /// Whether this is a user-supplied style sheet.
    pub fn is_custom(&self) -> bool {
        matches!(self, Theme::Custom(_))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Predefined(PredefinedTheme::default())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Predefined(theme) => match theme.to_possible_value() {
                Some(pv) => f.write_str(pv.get_name()),
                None => write!(f, "{:?}", theme),
            },
            Theme::Custom(path) => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_predefined() {
        assert_eq!(
            Theme::resolve("latex"),
            Theme::Predefined(PredefinedTheme::Latex)
        );
        assert_eq!(
            Theme::resolve("GitHub"),
            Theme::Predefined(PredefinedTheme::Github)
        );
    }

    #[test]
    fn test_resolve_falls_back_to_custom() {
        let theme = Theme::resolve("styles/print.css");
        assert_eq!(theme, Theme::Custom("styles/print.css".into()));
        assert!(theme.is_custom());
        assert_eq!(theme.to_string(), "styles/print.css");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Theme::Custom("a.css".into())).unwrap();
        assert_eq!(json, r#"{"kind":"custom","value":"a.css"}"#);
        let json = serde_json::to_string(&Theme::default()).unwrap();
        assert_eq!(json, r#"{"kind":"predefined","value":"github"}"#);
    }
}
