//! Error handling for the J-- compiler backend
//!
//! Code generation has no recoverable errors: every variant here aborts the
//! compilation unit. The variants distinguish a gap in the generator from an
//! inconsistency in the input handed over by semantic analysis.

use std::fmt;
use thiserror::Error;

/// What kind of name failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Method,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Method => write!(f, "method"),
        }
    }
}

/// Main compiler error type shared by both code generation stages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    /// A construct with no lowering or selection rule
    #[error("Unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },

    /// A reference that semantic analysis should have rejected
    #[error("Unresolved {kind} '{name}' in {context}")]
    UnresolvedSymbol {
        kind: SymbolKind,
        name: String,
        context: String,
    },

    /// The emitted instruction stream would pop an empty operand stack
    #[error("Operand stack underflow in method '{method}' at '{instruction}'")]
    StackUnderflow { method: String, instruction: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create an unsupported-construct error
    pub fn unsupported(construct: impl Into<String>) -> Self {
        CompilerError::UnsupportedConstruct {
            construct: construct.into(),
        }
    }

    /// Create an unresolved-symbol error
    pub fn unresolved(kind: SymbolKind, name: impl Into<String>, context: impl Into<String>) -> Self {
        CompilerError::UnresolvedSymbol {
            kind,
            name: name.into(),
            context: context.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CompilerError::InternalError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = CompilerError::unsupported("binary op '%'");
        assert_eq!(err.to_string(), "Unsupported construct: binary op '%'");
    }

    #[test]
    fn test_unresolved_message() {
        let err = CompilerError::unresolved(SymbolKind::Variable, "x", "method 'main'");
        assert_eq!(err.to_string(), "Unresolved variable 'x' in method 'main'");
    }

    #[test]
    fn test_from_string_is_internal() {
        let err: CompilerError = "boom".to_string().into();
        assert!(matches!(err, CompilerError::InternalError { .. }));
    }
}
