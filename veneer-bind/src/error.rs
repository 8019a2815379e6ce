//! Configuration-error taxonomy.
//!
//! Soft mismatches ("this candidate does not apply to this call") are data,
//! not errors; they surface as illegal bindings and eliminated candidates.
//! Only configuration mistakes land here: they abort the current resolution
//! call and indicate an error in how candidates or directives were declared,
//! not a property of the intercepted call.

use thiserror::Error;

use crate::directive::DirectiveKind;

/// Errors indicating an invalid engine or candidate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("directive kind `{0}` is already registered")]
    DuplicateDirective(DirectiveKind),

    #[error(
        "parameter {param} of `{candidate}` carries directives of two registered kinds: \
         `{first}` and `{second}`"
    )]
    ConflictingDirectives {
        candidate: String,
        param: usize,
        first: DirectiveKind,
        second: DirectiveKind,
    },

    #[error(
        "collect-remaining directive on parameter {param} of `{candidate}` requires a \
         sequence-typed parameter"
    )]
    NotASequence { candidate: String, param: usize },

    #[error("intercepted-call index {index} is claimed by two unique bindings of `{candidate}`")]
    DuplicateUniqueClaim { candidate: String, index: usize },
}
