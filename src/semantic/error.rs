//! Semantic-analysis error variants.
//!
//! The teacher's own type checker hand-rolls a `Display` impl per error struct; we
//! reach for `thiserror` instead; the crate appears throughout the wider retrieval
//! pack for exactly this shape of per-variant diagnostic enum, and it collapses the
//! hand-written `Display`/`Error` boilerplate to one `#[error(...)]` attribute per
//! variant without changing the messages a user sees.

use thiserror::Error;

use crate::types::Type;

#[derive(Debug, Clone, Error)]
pub enum SemanticError {
    #[error("duplicate identifier '{name}'")]
    DuplicateIdentifier { name: String },

    #[error("undefined identifier '{name}'")]
    UndefinedIdentifier { name: String },

    #[error("'{name}' is a function, not a variable")]
    NotAVariable { name: String },

    #[error("'{name}' is not a function")]
    NotAFunction { name: String },

    #[error("array parameter '{name}' must be passed by reference")]
    ArrayNotByReference { name: String },

    #[error("indexing non-array identifier '{name}'")]
    IndexingNonArray { name: String },

    #[error("array index must be of type int, found '{found}'")]
    IndexNotInt { found: Type },

    #[error("type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch { expected: Type, found: Type },

    #[error("incompatible operand types '{lhs}' and '{rhs}'")]
    IncompatibleOperands { lhs: Type, rhs: Type },

    #[error("not enough arguments in call to '{name}'")]
    NotEnoughArguments { name: String },

    #[error("too many arguments in call to '{name}'")]
    TooManyArguments { name: String },

    #[error("argument {index} to '{name}' has incompatible type: expected '{expected}', found '{found}'")]
    ArgumentTypeMismatch {
        name: String,
        index: usize,
        expected: Type,
        found: Type,
    },

    #[error("function '{name}' must return a value of type '{expected}'")]
    MissingReturnValue { name: String, expected: Type },

    #[error("procedure '{name}' cannot return a value")]
    UnexpectedReturnValue { name: String },

    #[error("cannot assign to '{name}'")]
    InvalidAssignmentTarget { name: String },

    #[error("array of type void is not allowed")]
    ArrayOfVoid,

    #[error("the program has no entry point")]
    NoEntryPoint,
}
