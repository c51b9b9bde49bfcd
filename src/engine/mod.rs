//! Engine facade: owns a validated, immutable rule table and exposes
//! [`Engine::parse`].

mod evaluator;
mod matcher;
mod transducer;

use std::sync::OnceLock;

use matcher::SubTable;

use crate::case;
use crate::data::{self, Pattern};
use crate::error::EngineError;

/// An immutable phonetic transliteration engine.
///
/// Construction validates the rule table once; every subsequent
/// [`Engine::parse`] call is infallible and reads only shared, immutable
/// state, so a single `Engine` may be used concurrently from multiple
/// threads without synchronization.
#[derive(Debug)]
pub struct Engine {
    non_rule: SubTable,
    rule: SubTable,
}

impl Engine {
    /// Builds the canonical engine from the embedded Avro rule table.
    ///
    /// A unit test (`data::validate::tests::canonical_table_is_valid`)
    /// checks the embedded table directly, so this never panics in
    /// practice; the `expect` exists only to surface a regression loudly if
    /// the embedded table is ever hand-edited into an invalid state.
    pub fn new() -> Self {
        Self::from_patterns(data::patterns::all().to_vec())
            .expect("embedded rule table is validated by a unit test")
    }

    /// Builds an engine from a caller-supplied rule table, validating it
    /// first. Lets a caller extend or replace the canonical table (e.g. to
    /// add project-specific shorthand) without forking the crate.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, EngineError> {
        data::validate_patterns(&patterns)?;

        let (rule_patterns, non_rule_patterns): (Vec<Pattern>, Vec<Pattern>) =
            patterns.into_iter().partition(Pattern::has_rules);

        log::debug!(
            "engine built with {} non-rule pattern(s), {} rule pattern(s)",
            non_rule_patterns.len(),
            rule_patterns.len()
        );

        Ok(Self {
            non_rule: SubTable::build(non_rule_patterns),
            rule: SubTable::build(rule_patterns),
        })
    }

    /// Transliterates `text`, returning the composed Bengali output. Total
    /// and deterministic: repeated calls with the same input yield identical
    /// output.
    pub fn parse(&self, text: &str) -> String {
        let normalized = case::normalize(text);
        let chars: Vec<char> = normalized.chars().collect();
        transducer::run(&self.non_rule, &self.rule, &chars)
    }

    /// Transliterates raw bytes that may not be valid UTF-8, replacing
    /// malformed sequences with U+FFFD before transduction (which then
    /// treats U+FFFD as ordinary punctuation and passes it through
    /// unchanged, since no pattern's `find` contains it).
    pub fn parse_lossy(&self, bytes: &[u8]) -> String {
        self.parse(&String::from_utf8_lossy(bytes))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_ENGINE: OnceLock<Engine> = OnceLock::new();

/// Transliterates `text` using a lazily-constructed, process-wide default
/// engine. Convenience for callers who don't need to hold their own
/// [`Engine`], mirroring the reference implementation's `parse_text`
/// classmethod.
pub fn parse(text: &str) -> String {
    DEFAULT_ENGINE.get_or_init(Engine::new).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MatchPredicate, PredicateKind, Scope};

    #[test]
    fn parse_is_total_and_deterministic() {
        let engine = Engine::new();
        let first = engine.parse("ami banglay gan gai");
        let second = engine.parse("ami banglay gan gai");
        assert_eq!(first, second);
    }

    #[test]
    fn parse_empty_string_is_empty() {
        let engine = Engine::new();
        assert_eq!(engine.parse(""), "");
    }

    #[test]
    fn from_patterns_rejects_invalid_tables() {
        let result = Engine::from_patterns(vec![Pattern {
            find: "",
            replace: "x",
            rules: &[],
        }]);
        assert_eq!(result.unwrap_err(), EngineError::EmptyFind { index: 0 });
    }

    #[test]
    fn from_patterns_accepts_custom_tables() {
        let engine = Engine::from_patterns(vec![Pattern {
            find: "vn",
            replace: "Việt Nam",
            rules: &[],
        }])
        .unwrap();
        assert_eq!(engine.parse("vn"), "Việt Nam");
    }

    #[test]
    fn custom_rule_pattern_respects_default_fallback() {
        let engine = Engine::from_patterns(vec![Pattern {
            find: "oi",
            replace: "DEFAULT",
            rules: &[data::ConditionalRule {
                matches: &[MatchPredicate {
                    kind: PredicateKind::Prefix,
                    scope: Scope::Punctuation,
                    negate: false,
                }],
                replace: "FIRED",
            }],
        }])
        .unwrap();
        assert_eq!(engine.parse("oi"), "FIRED");
        assert_eq!(engine.parse("koi"), "kDEFAULT");
    }

    #[test]
    fn free_function_parse_matches_a_fresh_engine() {
        let engine = Engine::new();
        assert_eq!(parse("kolkata"), engine.parse("kolkata"));
    }

    #[test]
    fn parse_lossy_passes_through_replacement_character() {
        let engine = Engine::new();
        // Lone continuation byte is invalid UTF-8 on its own.
        let bytes = [b'a', 0x80, b'b'];
        let out = engine.parse_lossy(&bytes);
        assert!(out.contains('\u{FFFD}'));
    }
}
