use std::fmt::Display;

/// Classification of a failed decode, derived from the underlying serde message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A required key was absent.
    ///
    /// An explicit `null` in a required field is a [`TypeMismatch`](Self::TypeMismatch).
    MissingField,
    /// A value had the wrong JSON shape, e.g. a string where an integer was expected.
    TypeMismatch,
    /// A closed enum received a wire string it does not know.
    UnknownVariant,
    /// No candidate of a polymorphic field accepted the payload.
    UnrecognizedShape,
    /// The input was not valid JSON.
    Syntax,
    Other,
}

impl DecodeErrorKind {
    fn classify(message: &str, syntax: bool) -> Self {
        if syntax {
            DecodeErrorKind::Syntax
        } else if message.starts_with("missing field") {
            DecodeErrorKind::MissingField
        } else if message.starts_with("invalid type") || message.starts_with("invalid value") {
            DecodeErrorKind::TypeMismatch
        } else if message.starts_with("unknown variant") {
            DecodeErrorKind::UnknownVariant
        } else if message.starts_with("unrecognized payment method option shape")
            || message.starts_with("data did not match any variant")
        {
            DecodeErrorKind::UnrecognizedShape
        } else {
            DecodeErrorKind::Other
        }
    }
}

/// A decode failure located at a field path inside the payload.
///
/// The path uses dotted notation rooted at `.`, e.g. `billing_details.address.city`
/// or `refunds.data[0].status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self::at(path, err.into_inner())
    }

    /// Input left over after a complete value, reported at the root.
    pub(crate) fn trailing(err: serde_json::Error) -> Self {
        Self::at(".".to_string(), err)
    }

    fn at(path: String, inner: serde_json::Error) -> Self {
        let syntax = inner.is_syntax() || inner.is_eof();
        let message = strip_position(&inner.to_string());

        DecodeError {
            path,
            kind: DecodeErrorKind::classify(&message, syntax),
            message,
        }
    }
}

// serde_json appends " at line L column C" to data errors; the path replaces it.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) if message[idx..].contains(" column ") => message[..idx].to_string(),
        _ => message.to_string(),
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at `{}`)", self.message, self.path)
    }
}

impl std::error::Error for DecodeError {}

/// Error types for Stripe model and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A payload did not match the shape of the target type.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// None of the payment method option shapes accepted the payload.
    #[error("unrecognized payment method option shape (attempted: {})", attempted.join(", "))]
    UnrecognizedMethodOption { attempted: Vec<String> },

    /// Request headers were requested before a secret key was configured.
    #[error("API secret is not configured; call `configure` before building request headers")]
    MissingSecret,

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// JSON serialization errors.
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl Error {
    /// Returns the decode details when this error came from a payload mismatch.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Stripe model operations.
pub type Result<T> = std::result::Result<T, Error>;
