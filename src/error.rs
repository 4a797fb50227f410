use std::fmt::{self, Display};

use thiserror::Error;

/// The reason a media type string was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// there was nothing to parse (e.g. `""` or `";;"`)
    EmptyInput,
    /// the part before the first `;` has no `type/subtype` pair
    MissingSlash,
}

impl ErrorKind {
    pub fn with_input<I>(self, input: I) -> ParserError
        where I: Into<String>
    {
        ParserError { input: input.into(), kind: self }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        use self::ErrorKind::*;
        match *self {
            EmptyInput => write!(fter, "input is empty"),
            MissingSlash => write!(fter, "expected a \"type/subtype\" pair"),
        }
    }
}

/// Returned when a string can not be parsed as a media type.
///
/// This is the only error the crate produces. Everything else the parser
/// does not understand (parameter tokens without `=`, additional `;` segments)
/// is dropped without failing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed media type string {input:?}: {kind}")]
pub struct ParserError {
    input: String,
    kind: ErrorKind,
}

impl ParserError {

    /// the input which failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
