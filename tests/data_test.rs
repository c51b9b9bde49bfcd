//! Invariants about the canonical rule table itself.

use avro_phonetic::data::patterns;

#[test]
fn canonical_table_has_the_expected_size() {
    assert_eq!(patterns::all().len(), 289);
}

#[test]
fn duplicate_sc_entry_is_preserved_in_original_order() {
    // The reference table lists "Sc" twice with the same replacement. The
    // second occurrence is unreachable (first-match-wins), but a future
    // table edit should not silently delete it and change this invariant.
    let indices: Vec<usize> = patterns::all()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.find == "Sc")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(indices.len(), 2, "expected exactly two \"Sc\" entries");
    assert!(indices[0] < indices[1]);
}

#[test]
fn every_pattern_has_a_non_empty_find() {
    for pattern in patterns::all() {
        assert!(!pattern.find.is_empty());
    }
}

#[test]
fn every_rule_has_at_least_one_predicate() {
    for pattern in patterns::all() {
        for rule in pattern.rules {
            assert!(!rule.matches.is_empty());
        }
    }
}

#[test]
fn every_exact_predicate_has_a_non_empty_value() {
    use avro_phonetic::data::Scope;
    for pattern in patterns::all() {
        for rule in pattern.rules {
            for predicate in rule.matches {
                if let Scope::Exact(value) = predicate.scope {
                    assert!(!value.is_empty());
                }
            }
        }
    }
}
