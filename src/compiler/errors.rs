//! Error types produced by the compilation pipeline.
//!
//! There are three fatal error kinds and no recovery path: the compiler
//! either returns a complete [`crate::compiler::types::CompileOutput`] or
//! one of these.

use std::fmt;

/// Why a compile failed.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The parser could not produce a full program: either an expression
    /// failed to parse where one was required, or an expression parsed but
    /// no terminating `;` followed it.
    UnexpectedToken,
    /// Tokenization stopped before consuming the whole source, leaving
    /// unrecognized characters behind.
    TrailingInput,
    /// A numeric run from the tokenizer could not be converted to an
    /// integer or float (for example, `1.2.3`).
    BadLiteral(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnexpectedToken => write!(f, "unexpected token"),
            CompileError::TrailingInput => write!(f, "unrecognized trailing input"),
            CompileError::BadLiteral(text) => {
                write!(f, "invalid numeric literal '{text}'")
            }
        }
    }
}

impl std::error::Error for CompileError {}
