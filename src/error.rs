//! Error types for mdpdf.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single problem with the user's command line.
///
/// These are collected across the whole input and reported together,
/// see [`ArgumentErrors`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// A token that matches no registered symbol.
    #[error("Unrecognized command or argument '{token}'")]
    UnknownSymbol { token: String },

    /// A required positional argument was not supplied.
    #[error("Required argument missing for '{name}'")]
    MissingRequiredArgument { name: String },

    /// A value was rejected by a validator or could not be converted.
    #[error("Invalid value '{value}' for '{symbol}': {reason}")]
    Validation {
        symbol: String,
        value: String,
        reason: String,
    },

    /// A directional shorthand with zero or more than four parts.
    #[error("Invalid shorthand '{value}' for '{symbol}': {reason}")]
    InvalidShorthand {
        symbol: String,
        value: String,
        reason: String,
    },

    /// An option given together with an exclusive option that forbids it.
    #[error("Option '{option}' cannot be combined with '{exclusive}'")]
    ConflictingOption { exclusive: String, option: String },
}

impl ArgumentError {
    /// Create a validation error.
    pub fn validation(
        symbol: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ArgumentError::Validation {
            symbol: symbol.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// The symbol name this error refers to, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            ArgumentError::UnknownSymbol { .. } => None,
            ArgumentError::MissingRequiredArgument { name } => Some(name),
            ArgumentError::Validation { symbol, .. } => Some(symbol),
            ArgumentError::InvalidShorthand { symbol, .. } => Some(symbol),
            ArgumentError::ConflictingOption { option, .. } => Some(option),
        }
    }
}

/// Every argument error found in one invocation, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentErrors(Vec<ArgumentError>);

impl ArgumentErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn push(&mut self, error: ArgumentError) {
        self.0.push(error);
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the collected errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ArgumentError> {
        self.0.iter()
    }

    /// Turn the collection into a result: `Ok` when empty.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Arguments(self))
        }
    }
}

impl Extend<ArgumentError> for ArgumentErrors {
    fn extend<T: IntoIterator<Item = ArgumentError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl From<Vec<ArgumentError>> for ArgumentErrors {
    fn from(errors: Vec<ArgumentError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ArgumentErrors {
    type Item = ArgumentError;
    type IntoIter = std::vec::IntoIter<ArgumentError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentErrors {
    type Item = &'a ArgumentError;
    type IntoIter = std::slice::Iter<'a, ArgumentError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ArgumentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Error types that can occur while resolving a configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more problems with the command line.
    #[error("{0}")]
    Arguments(ArgumentErrors),

    /// A symbol name or alias was registered twice.
    #[error("Duplicate symbol: '{0}' is already registered")]
    DuplicateSymbol(String),

    /// A symbol declaration is malformed: an option without aliases or
    /// with a repeated alias.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// A referenced file could not be read at bind time.
    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The registry and the binder disagree. Indicates a defect.
    #[error("Internal binding error: {0}")]
    InternalBinding(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization of the resolved configuration failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The conversion engine reported a failure.
    #[error("Conversion error: {0}")]
    Convert(String),
}

impl Error {
    /// Whether the error was caused by user input rather than a defect.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Error::InternalBinding(_) | Error::DuplicateSymbol(_) | Error::InvalidSymbol(_)
        )
    }
}

impl From<ArgumentErrors> for Error {
    fn from(errors: ArgumentErrors) -> Self {
        Error::Arguments(errors)
    }
}

impl From<ArgumentError> for Error {
    fn from(error: ArgumentError) -> Self {
        Error::Arguments(ArgumentErrors::from(vec![error]))
    }
}
