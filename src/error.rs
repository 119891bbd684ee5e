use miette::Diagnostic;
use thiserror::Error;

/// The outcome of running a decoder: the decoded value, or the first failure.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input had the wrong shape, e.g. a string where a mapping was required.
    TypeMismatch,
    /// A required key was absent from a mapping.
    MissingField,
    /// The value was present but could not be converted to the target type.
    Conversion,
    /// A literal did not match, usually the last branch of an alternation.
    NoMatch,
    /// A failure raised explicitly by a `fail` decoder.
    Custom,
    /// An upstream producer rejected the raw text before decoding started.
    Input,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected}, found '{found}'")]
    #[diagnostic(
        code(decode::type_mismatch),
        help("The input does not have the shape this decoder reads.")
    )]
    TypeMismatch { expected: &'static str, found: String },

    #[error("{input} doesn't contain key '{key}'")]
    #[diagnostic(
        code(decode::missing_key),
        help("Add the key to the mapping, or decode it with an alternative.")
    )]
    MissingKey { key: String, input: String },

    #[error("'{input}' is not an integer")]
    #[diagnostic(
        code(decode::not_an_integer),
        help("Integers are written as an optional sign followed by digits, with no surrounding whitespace.")
    )]
    NotAnInteger { input: String },

    #[error("'{input}' doesn't match '{expected}'")]
    #[diagnostic(code(decode::mismatch))]
    Mismatch { input: String, expected: String },

    #[error("{0}")]
    #[diagnostic(code(decode::custom))]
    Custom(String),

    #[error("invalid input: {0}")]
    #[diagnostic(
        code(decode::input),
        help("Only strings and mappings with string keys can be decoded.")
    )]
    Input(String),
}

impl DecodeError {
    /// Builds a failure carrying `message` verbatim.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty. A failure must always say what went wrong.
    #[track_caller]
    pub fn custom(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "decode failure message must not be empty");
        DecodeError::Custom(message)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            DecodeError::MissingKey { .. } => ErrorKind::MissingField,
            DecodeError::NotAnInteger { .. } => ErrorKind::Conversion,
            DecodeError::Mismatch { .. } => ErrorKind::NoMatch,
            DecodeError::Custom(_) => ErrorKind::Custom,
            DecodeError::Input(_) => ErrorKind::Input,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Input(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for DecodeError {
    fn from(err: serde_yaml::Error) -> Self {
        DecodeError::Input(err.to_string())
    }
}
