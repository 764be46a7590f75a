//! Error types used in the library.
//!
//! - Parse errors are for input which does not describe an element, pair, or literal.
//! - Build errors are for input which is well-formed but inconsistent with the context, e.g. a pair with an element outside the universe.
//! - Solve errors are for formulas which cannot be solved within the configured bounds.
//!
//! None of these are fatal: a caller may report the error and continue with further input.
//!
//! An unsatisfiable formula is *not* an error, and is instead a [solution](crate::procedures::solve::Solution).

use crate::structures::pair::Element;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Build(BuildError),
    Solve(SolveError),
}

/// Noted errors when reading input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Blank input where some element or pair was expected.
    Empty,

    /// Something other than an integer where an element was expected.
    Element(String),

    /// Something other than one or two comma separated elements where a pair was expected.
    PairFormat(String),

    /// Something other than an (optionally negated) atom where a literal was expected.
    Literal(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors when building a universe and relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A pair with an element outside the universe.
    UnknownElement(Element),

    /// An attempt to analyse a relation over an empty universe.
    EmptyUniverse,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when solving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// There are more free atoms than the enumeration limit allows.
    EnumerationLimit { free: usize, limit: usize },
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no input"),
            Self::Element(string) => write!(f, "'{string}' is not an integer"),
            Self::PairFormat(string) => write!(f, "'{string}' is not of the form 'x,y' or 'x'"),
            Self::Literal(string) => write!(f, "'{string}' is not a literal"),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownElement(element) => write!(f, "{element} is not an element of the set"),
            Self::EmptyUniverse => write!(f, "the set is empty"),
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnumerationLimit { free, limit } => {
                write!(f, "{free} free atoms exceeds the enumeration limit of {limit}")
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Build(e) => write!(f, "Build error: {e}"),
            Self::Solve(e) => write!(f, "Solve error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
