//! Error types used in the library.
//!
//! - All errors which arise from a request are recoverable, and a session reports each with a single `?`.
//! - Some errors are internal to the library and signal misuse of a structure, e.g. a vector built from a slice whose length is not a power of two.
//!
//! Names of the error enums --- for the most part --- overlap with the modules which raise them.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Codec(CodecError),
    Composition(CompositionError),
    Config(ConfigError),
    Evaluation(EvaluationError),
    Request(RequestError),
    Resolve(ResolveError),
}

/// Noted errors when reading symbols as truth values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// A character outside of the truth symbol alphabet.
    InvalidSymbol(char),

    /// A code whose length is not a positive power of two.
    InvalidLength(usize),
}

impl From<CodecError> for ErrorKind {
    fn from(e: CodecError) -> Self {
        ErrorKind::Codec(e)
    }
}

/// Noted errors when composing truth vectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompositionError {
    /// The outer vector of a composition has no inputs, and so nothing to receive the inner output.
    ConstantOuter,

    /// The composed vector would exceed the permitted arity.
    ArityExceeded { arity: usize, limit: usize },
}

impl From<CompositionError> for ErrorKind {
    fn from(e: CompositionError) -> Self {
        ErrorKind::Composition(e)
    }
}

/// Errors when building a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String),

    /// The configuration file is not valid TOML, or has some unexpected field.
    Toml(String),

    /// Some option was given a value outside of its bounds.
    OutOfRange {
        name: &'static str,
        min: usize,
        max: usize,
    },

    /// A user alias which does not resolve to a truth vector.
    Alias { name: String, code: String },

    /// An unrecognised log level.
    LogLevel(String),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The length of an assignment differs from the arity of the vector it is given to.
    ArityMismatch { expected: usize, found: usize },
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestError {
    /// More than one `-` separator on a line.
    MultipleAssignments,
}

impl From<RequestError> for ErrorKind {
    fn from(e: RequestError) -> Self {
        ErrorKind::Request(e)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveError {
    /// A name found in neither the alias table nor the truth table, and which is not a literal code.
    UnknownConnective(String),
}

impl From<ResolveError> for ErrorKind {
    fn from(e: ResolveError) -> Self {
        ErrorKind::Resolve(e)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "{e}"),
            Self::Composition(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Request(e) => write!(f, "{e}"),
            Self::Resolve(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol(c) => write!(f, "invalid truth symbol {c:?}"),
            Self::InvalidLength(len) => {
                write!(f, "a code of length {len} is not a power of two")
            }
        }
    }
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantOuter => write!(f, "a constant cannot receive a composed input"),
            Self::ArityExceeded { arity, limit } => {
                write!(f, "composition of arity {arity} exceeds the limit of {limit}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(s) => write!(f, "unable to read configuration: {s}"),
            Self::Toml(s) => write!(f, "unable to parse configuration: {s}"),
            Self::OutOfRange { name, min, max } => {
                write!(f, "{name} requires a value between {min} and {max}")
            }
            Self::Alias { name, code } => {
                write!(f, "alias {name} maps to {code}, which does not resolve")
            }
            Self::LogLevel(s) => write!(f, "unknown log level {s:?}"),
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch { expected, found } => {
                write!(f, "expected an assignment of {expected} values, found {found}")
            }
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleAssignments => write!(f, "at most one assignment may be given"),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConnective(name) => write!(f, "unknown connective {name:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
