//! Construction-time validation of a rule table.
//!
//! Invariants enforced (spec: every `find` non-empty, every `matches`
//! non-empty, every `exact` predicate carries a non-empty `value`):
//! an "unknown scope" failure mode from the reference implementation's
//! string-typed scopes has no Rust counterpart — [`Scope`] is an enum, so
//! that case is closed by the type system rather than checked here.

use super::types::{Pattern, Scope};
use crate::error::EngineError;

pub(crate) fn validate_patterns(patterns: &[Pattern]) -> Result<(), EngineError> {
    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.find.is_empty() {
            return Err(EngineError::EmptyFind { index });
        }
        for (rule_idx, rule) in pattern.rules.iter().enumerate() {
            if rule.matches.is_empty() {
                return Err(EngineError::EmptyMatches {
                    pattern: index,
                    rule: rule_idx,
                });
            }
            for (predicate_idx, predicate) in rule.matches.iter().enumerate() {
                if let Scope::Exact(value) = predicate.scope {
                    if value.is_empty() {
                        return Err(EngineError::MissingExactValue {
                            pattern: index,
                            rule: rule_idx,
                            predicate: predicate_idx,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
