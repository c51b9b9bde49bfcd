//! Construction-time failures.
//!
//! Matching and transduction never fail — see [`crate::engine::Engine::parse`]
//! — so the only fallible operation in this crate is building the engine from
//! a rule table.

use thiserror::Error;

/// A rule table failed validation and no [`crate::engine::Engine`] could be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Pattern at `index` has an empty `find` string.
    #[error("pattern at index {index} has an empty `find`")]
    EmptyFind {
        /// Index into the offending rule table.
        index: usize,
    },

    /// An `exact`-scoped predicate is missing its literal `value`.
    #[error(
        "pattern at index {pattern}, rule {rule}, predicate {predicate} has scope `exact` but no value"
    )]
    MissingExactValue {
        /// Index of the pattern carrying the offending rule.
        pattern: usize,
        /// Index of the rule within the pattern's rule list.
        rule: usize,
        /// Index of the predicate within the rule's match list.
        predicate: usize,
    },

    /// A rule's `matches` list is empty.
    #[error("pattern at index {pattern}, rule {rule} has no predicates")]
    EmptyMatches {
        /// Index of the pattern carrying the offending rule.
        pattern: usize,
        /// Index of the rule within the pattern's rule list.
        rule: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_index() {
        let err = EngineError::EmptyFind { index: 3 };
        assert!(err.to_string().contains('3'));
    }
}
