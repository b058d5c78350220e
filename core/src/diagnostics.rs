//! diagnostics.rs
//!
//! Error taxonomy of the log-tagging tool that produces `log_lookup.json`.
//!
//! These errors are raised while tags are allocated and log calls are
//! parsed, never recovered from, and only need to read well when an operator
//! looks at a failed run. Each kind carries a fixed cause; the caller adds
//! the specific message.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No more values can be allocated to a tag range.
    OutOfRange,
    /// Looking up a mapped tag/id pair gave mismatched values.
    TagIdMismatch,
    /// A tag literal is blank.
    BlankTag,
    /// A tag definition is implicit, a single char, or a number.
    MalformedTagDefinition,
    /// A log call passes an implicit string or number.
    MalformedLogCall,
}

/// Fixed cause per kind, indexed by `ErrorKind as usize`.
const CAUSES: [&str; 5] = [
    "No more allocatable values to range",
    "Resulting matched pair do not match in value",
    "TAG literal string cannot be blank",
    "Implicit, single char or number definition of a LOG_TAG type",
    "Implicit string or number inside a call to Log",
];

impl ErrorKind {
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::OutOfRange,
        ErrorKind::TagIdMismatch,
        ErrorKind::BlankTag,
        ErrorKind::MalformedTagDefinition,
        ErrorKind::MalformedLogCall,
    ];

    pub fn cause(self) -> &'static str {
        CAUSES[self as usize]
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cause())
    }
}

/// One taxonomy error: a kind plus the caller's message, trimmed.
///
/// `Display` renders `"<cause>\n\t<message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}\n\t{}", .kind.cause(), .message)]
pub struct ScriptError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ScriptError {
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self { kind, message: message.as_ref().trim().to_owned() }
    }

    pub fn out_of_range(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::OutOfRange, message)
    }

    pub fn tag_id_mismatch(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::TagIdMismatch, message)
    }

    pub fn blank_tag(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::BlankTag, message)
    }

    pub fn malformed_tag_definition(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::MalformedTagDefinition, message)
    }

    pub fn malformed_log_call(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::MalformedLogCall, message)
    }

    pub fn cause(&self) -> &'static str {
        self.kind.cause()
    }
}

/// Render a taxonomy error as `"<cause>\n\t<message>"`; hand any other error
/// back untouched.
pub fn error_to_string<E>(error: E) -> Result<String, E>
where
    E: AsRef<dyn StdError + Send + Sync + 'static>,
{
    match error.as_ref().downcast_ref::<ScriptError>() {
        Some(script) => Ok(script.to_string()),
        None => Err(error),
    }
}

/// Borrowing variant of [`error_to_string`] for errors behind a reference.
pub fn describe(error: &(dyn StdError + 'static)) -> Option<String> {
    error.downcast_ref::<ScriptError>().map(ToString::to_string)
}
