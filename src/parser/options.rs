//! Parser configuration.

/// Options controlling how tokens are matched to symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Match option aliases case-sensitively
    pub case_sensitive: bool,

    /// Accept values attached with `=` or `:` (e.g. `--scale=1.5`)
    pub allow_attached_values: bool,

    /// Treat every token after a bare `--` as positional
    pub end_of_options_marker: bool,
}

impl ParserConfig {
    /// Create new parser options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity of option aliases.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Match aliases regardless of case.
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Enable or disable attached values.
    pub fn with_attached_values(mut self, allow: bool) -> Self {
        self.allow_attached_values = allow;
        self
    }

    /// Enable or disable the `--` marker.
    pub fn with_end_of_options_marker(mut self, enabled: bool) -> Self {
        self.end_of_options_marker = enabled;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            allow_attached_values: true,
            end_of_options_marker: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .case_insensitive()
            .with_attached_values(false)
            .with_end_of_options_marker(false);

        assert!(!config.case_sensitive);
        assert!(!config.allow_attached_values);
        assert!(!config.end_of_options_marker);
    }

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.case_sensitive);
        assert!(config.allow_attached_values);
        assert!(config.end_of_options_marker);
    }
}
