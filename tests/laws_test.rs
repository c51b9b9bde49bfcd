//! Engine-level checks for the matching laws in the design notes:
//! greedy-leftmost, non-rule precedence, and boundary semantics.

use avro_phonetic::Engine;

#[test]
fn triple_dot_precedes_double_and_single_dot() {
    let engine = Engine::new();
    assert_eq!(engine.parse("..."), "...");
    assert_eq!(engine.parse(".."), "।।");
    assert_eq!(engine.parse("."), "।");
}

#[test]
fn longest_applicable_consonant_cluster_wins_at_each_cursor() {
    let engine = Engine::new();
    // "bhl" is listed ahead of "bh" and "b" specifically so the 3-character
    // cluster wins at cursor 0 instead of "bh" + "l" falling through.
    assert_eq!(engine.parse("bhl"), "ভ্ল");
}

#[test]
fn default_engine_and_custom_instances_are_independent() {
    let custom = Engine::from_patterns(vec![avro_phonetic::data::Pattern {
        find: "x",
        replace: "CUSTOM",
        rules: &[],
    }])
    .unwrap();
    let canonical = Engine::new();
    assert_eq!(custom.parse("x"), "CUSTOM");
    assert_ne!(canonical.parse("x"), "CUSTOM");
}
