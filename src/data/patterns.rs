//! Canonical Avro phonetic rule table.
//!
//! Order is semantically significant — see [`crate::engine::Engine::from_patterns`].
//! Reproduced verbatim (including the unreachable duplicate `"Sc"` entry) from the
//! reference implementation; do not hand-edit without regenerating from that source.

use super::types::{ConditionalRule, MatchPredicate, Pattern, PredicateKind, Scope};

pub(crate) const PATTERN_COUNT: usize = 289;

pub(crate) static PATTERNS: [Pattern; PATTERN_COUNT] = [
    Pattern { find: "bhl", replace: "ভ্ল", rules: &[] },
    Pattern { find: "psh", replace: "পশ", rules: &[] },
    Pattern { find: "bdh", replace: "ব্ধ", rules: &[] },
    Pattern { find: "bj", replace: "ব্জ", rules: &[] },
    Pattern { find: "bd", replace: "ব্দ", rules: &[] },
    Pattern { find: "bb", replace: "ব্ব", rules: &[] },
    Pattern { find: "bl", replace: "ব্ল", rules: &[] },
    Pattern { find: "bh", replace: "ভ", rules: &[] },
    Pattern { find: "vl", replace: "ভ্ল", rules: &[] },
    Pattern { find: "b", replace: "ব", rules: &[] },
    Pattern { find: "v", replace: "ভ", rules: &[] },
    Pattern { find: "cNG", replace: "চ্ঞ", rules: &[] },
    Pattern { find: "cch", replace: "চ্ছ", rules: &[] },
    Pattern { find: "cc", replace: "চ্চ", rules: &[] },
    Pattern { find: "ch", replace: "ছ", rules: &[] },
    Pattern { find: "c", replace: "চ", rules: &[] },
    Pattern { find: "dhn", replace: "ধ্ন", rules: &[] },
    Pattern { find: "dhm", replace: "ধ্ম", rules: &[] },
    Pattern { find: "dgh", replace: "দ্ঘ", rules: &[] },
    Pattern { find: "ddh", replace: "দ্ধ", rules: &[] },
    Pattern { find: "dbh", replace: "দ্ভ", rules: &[] },
    Pattern { find: "dv", replace: "দ্ভ", rules: &[] },
    Pattern { find: "dm", replace: "দ্ম", rules: &[] },
    Pattern { find: "DD", replace: "ড্ড", rules: &[] },
    Pattern { find: "Dh", replace: "ঢ", rules: &[] },
    Pattern { find: "dh", replace: "ধ", rules: &[] },
    Pattern { find: "dg", replace: "দ্গ", rules: &[] },
    Pattern { find: "dd", replace: "দ্দ", rules: &[] },
    Pattern { find: "D", replace: "ড", rules: &[] },
    Pattern { find: "d", replace: "দ", rules: &[] },
    Pattern { find: "...", replace: "...", rules: &[] },
    Pattern { find: ".`", replace: ".", rules: &[] },
    Pattern { find: "..", replace: "।।", rules: &[] },
    Pattern { find: ".", replace: "।", rules: &[] },
    Pattern { find: "ghn", replace: "ঘ্ন", rules: &[] },
    Pattern { find: "Ghn", replace: "ঘ্ন", rules: &[] },
    Pattern { find: "gdh", replace: "গ্ধ", rules: &[] },
    Pattern { find: "Gdh", replace: "গ্ধ", rules: &[] },
    Pattern { find: "gN", replace: "গ্ণ", rules: &[] },
    Pattern { find: "GN", replace: "গ্ণ", rules: &[] },
    Pattern { find: "gn", replace: "গ্ন", rules: &[] },
    Pattern { find: "Gn", replace: "গ্ন", rules: &[] },
    Pattern { find: "gm", replace: "গ্ম", rules: &[] },
    Pattern { find: "Gm", replace: "গ্ম", rules: &[] },
    Pattern { find: "gl", replace: "গ্ল", rules: &[] },
    Pattern { find: "Gl", replace: "গ্ল", rules: &[] },
    Pattern { find: "gg", replace: "জ্ঞ", rules: &[] },
    Pattern { find: "GG", replace: "জ্ঞ", rules: &[] },
    Pattern { find: "Gg", replace: "জ্ঞ", rules: &[] },
    Pattern { find: "gG", replace: "জ্ঞ", rules: &[] },
    Pattern { find: "gh", replace: "ঘ", rules: &[] },
    Pattern { find: "Gh", replace: "ঘ", rules: &[] },
    Pattern { find: "g", replace: "গ", rules: &[] },
    Pattern { find: "G", replace: "গ", rules: &[] },
    Pattern { find: "hN", replace: "হ্ণ", rules: &[] },
    Pattern { find: "hn", replace: "হ্ন", rules: &[] },
    Pattern { find: "hm", replace: "হ্ম", rules: &[] },
    Pattern { find: "hl", replace: "হ্ল", rules: &[] },
    Pattern { find: "h", replace: "হ", rules: &[] },
    Pattern { find: "jjh", replace: "জ্ঝ", rules: &[] },
    Pattern { find: "jNG", replace: "জ্ঞ", rules: &[] },
    Pattern { find: "jh", replace: "ঝ", rules: &[] },
    Pattern { find: "jj", replace: "জ্জ", rules: &[] },
    Pattern { find: "j", replace: "জ", rules: &[] },
    Pattern { find: "J", replace: "জ", rules: &[] },
    Pattern { find: "kkhN", replace: "ক্ষ্ণ", rules: &[] },
    Pattern { find: "kShN", replace: "ক্ষ্ণ", rules: &[] },
    Pattern { find: "kkhm", replace: "ক্ষ্ম", rules: &[] },
    Pattern { find: "kShm", replace: "ক্ষ্ম", rules: &[] },
    Pattern { find: "kxN", replace: "ক্ষ্ণ", rules: &[] },
    Pattern { find: "kxm", replace: "ক্ষ্ম", rules: &[] },
    Pattern { find: "kkh", replace: "ক্ষ", rules: &[] },
    Pattern { find: "kSh", replace: "ক্ষ", rules: &[] },
    Pattern { find: "ksh", replace: "কশ", rules: &[] },
    Pattern { find: "kx", replace: "ক্ষ", rules: &[] },
    Pattern { find: "kk", replace: "ক্ক", rules: &[] },
    Pattern { find: "kT", replace: "ক্ট", rules: &[] },
    Pattern { find: "kt", replace: "ক্ত", rules: &[] },
    Pattern { find: "kl", replace: "ক্ল", rules: &[] },
    Pattern { find: "ks", replace: "ক্স", rules: &[] },
    Pattern { find: "kh", replace: "খ", rules: &[] },
    Pattern { find: "k", replace: "ক", rules: &[] },
    Pattern { find: "lbh", replace: "ল্ভ", rules: &[] },
    Pattern { find: "ldh", replace: "ল্ধ", rules: &[] },
    Pattern { find: "lkh", replace: "লখ", rules: &[] },
    Pattern { find: "lgh", replace: "লঘ", rules: &[] },
    Pattern { find: "lph", replace: "লফ", rules: &[] },
    Pattern { find: "lk", replace: "ল্ক", rules: &[] },
    Pattern { find: "lg", replace: "ল্গ", rules: &[] },
    Pattern { find: "lT", replace: "ল্ট", rules: &[] },
    Pattern { find: "lD", replace: "ল্ড", rules: &[] },
    Pattern { find: "lp", replace: "ল্প", rules: &[] },
    Pattern { find: "lv", replace: "ল্ভ", rules: &[] },
    Pattern { find: "lm", replace: "ল্ম", rules: &[] },
    Pattern { find: "ll", replace: "ল্ল", rules: &[] },
    Pattern { find: "lb", replace: "ল্ব", rules: &[] },
    Pattern { find: "l", replace: "ল", rules: &[] },
    Pattern { find: "mth", replace: "ম্থ", rules: &[] },
    Pattern { find: "mph", replace: "ম্ফ", rules: &[] },
    Pattern { find: "mbh", replace: "ম্ভ", rules: &[] },
    Pattern { find: "mpl", replace: "মপ্ল", rules: &[] },
    Pattern { find: "mn", replace: "ম্ন", rules: &[] },
    Pattern { find: "mp", replace: "ম্প", rules: &[] },
    Pattern { find: "mv", replace: "ম্ভ", rules: &[] },
    Pattern { find: "mm", replace: "ম্ম", rules: &[] },
    Pattern { find: "ml", replace: "ম্ল", rules: &[] },
    Pattern { find: "mb", replace: "ম্ব", rules: &[] },
    Pattern { find: "mf", replace: "ম্ফ", rules: &[] },
    Pattern { find: "m", replace: "ম", rules: &[] },
    Pattern { find: "0", replace: "০", rules: &[] },
    Pattern { find: "1", replace: "১", rules: &[] },
    Pattern { find: "2", replace: "২", rules: &[] },
    Pattern { find: "3", replace: "৩", rules: &[] },
    Pattern { find: "4", replace: "৪", rules: &[] },
    Pattern { find: "5", replace: "৫", rules: &[] },
    Pattern { find: "6", replace: "৬", rules: &[] },
    Pattern { find: "7", replace: "৭", rules: &[] },
    Pattern { find: "8", replace: "৮", rules: &[] },
    Pattern { find: "9", replace: "৯", rules: &[] },
    Pattern { find: "NgkSh", replace: "ঙ্ক্ষ", rules: &[] },
    Pattern { find: "Ngkkh", replace: "ঙ্ক্ষ", rules: &[] },
    Pattern { find: "NGch", replace: "ঞ্ছ", rules: &[] },
    Pattern { find: "Nggh", replace: "ঙ্ঘ", rules: &[] },
    Pattern { find: "Ngkh", replace: "ঙ্খ", rules: &[] },
    Pattern { find: "NGjh", replace: "ঞ্ঝ", rules: &[] },
    Pattern { find: "ngOU", replace: "ঙ্গৌ", rules: &[] },
    Pattern { find: "ngOI", replace: "ঙ্গৈ", rules: &[] },
    Pattern { find: "Ngkx", replace: "ঙ্ক্ষ", rules: &[] },
    Pattern { find: "NGc", replace: "ঞ্চ", rules: &[] },
    Pattern { find: "nch", replace: "ঞ্ছ", rules: &[] },
    Pattern { find: "njh", replace: "ঞ্ঝ", rules: &[] },
    Pattern { find: "ngh", replace: "ঙ্ঘ", rules: &[] },
    Pattern { find: "Ngk", replace: "ঙ্ক", rules: &[] },
    Pattern { find: "Ngx", replace: "ঙ্ষ", rules: &[] },
    Pattern { find: "Ngg", replace: "ঙ্গ", rules: &[] },
    Pattern { find: "Ngm", replace: "ঙ্ম", rules: &[] },
    Pattern { find: "NGj", replace: "ঞ্জ", rules: &[] },
    Pattern { find: "ndh", replace: "ন্ধ", rules: &[] },
    Pattern { find: "nTh", replace: "ন্ঠ", rules: &[] },
    Pattern { find: "NTh", replace: "ণ্ঠ", rules: &[] },
    Pattern { find: "nth", replace: "ন্থ", rules: &[] },
    Pattern { find: "nkh", replace: "ঙ্খ", rules: &[] },
    Pattern { find: "ngo", replace: "ঙ্গ", rules: &[] },
    Pattern { find: "nga", replace: "ঙ্গা", rules: &[] },
    Pattern { find: "ngi", replace: "ঙ্গি", rules: &[] },
    Pattern { find: "ngI", replace: "ঙ্গী", rules: &[] },
    Pattern { find: "ngu", replace: "ঙ্গু", rules: &[] },
    Pattern { find: "ngU", replace: "ঙ্গূ", rules: &[] },
    Pattern { find: "nge", replace: "ঙ্গে", rules: &[] },
    Pattern { find: "ngO", replace: "ঙ্গো", rules: &[] },
    Pattern { find: "NDh", replace: "ণ্ঢ", rules: &[] },
    Pattern { find: "nsh", replace: "নশ", rules: &[] },
    Pattern { find: "Ngr", replace: "ঙর", rules: &[] },
    Pattern { find: "NGr", replace: "ঞর", rules: &[] },
    Pattern { find: "ngr", replace: "ংর", rules: &[] },
    Pattern { find: "nj", replace: "ঞ্জ", rules: &[] },
    Pattern { find: "Ng", replace: "ঙ", rules: &[] },
    Pattern { find: "NG", replace: "ঞ", rules: &[] },
    Pattern { find: "nk", replace: "ঙ্ক", rules: &[] },
    Pattern { find: "ng", replace: "ং", rules: &[] },
    Pattern { find: "nn", replace: "ন্ন", rules: &[] },
    Pattern { find: "NN", replace: "ণ্ণ", rules: &[] },
    Pattern { find: "Nn", replace: "ণ্ন", rules: &[] },
    Pattern { find: "nm", replace: "ন্ম", rules: &[] },
    Pattern { find: "Nm", replace: "ণ্ম", rules: &[] },
    Pattern { find: "nd", replace: "ন্দ", rules: &[] },
    Pattern { find: "nT", replace: "ন্ট", rules: &[] },
    Pattern { find: "NT", replace: "ণ্ট", rules: &[] },
    Pattern { find: "nD", replace: "ন্ড", rules: &[] },
    Pattern { find: "ND", replace: "ণ্ড", rules: &[] },
    Pattern { find: "nt", replace: "ন্ত", rules: &[] },
    Pattern { find: "ns", replace: "ন্স", rules: &[] },
    Pattern { find: "nc", replace: "ঞ্চ", rules: &[] },
    Pattern { find: "n", replace: "ন", rules: &[] },
    Pattern { find: "N", replace: "ণ", rules: &[] },
    Pattern { find: "OI`", replace: "ৈ", rules: &[] },
    Pattern { find: "OU`", replace: "ৌ", rules: &[] },
    Pattern { find: "O`", replace: "ো", rules: &[] },
    Pattern { find: "OI", replace: "ৈ", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }], replace: "ঐ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "ঐ" }] },
    Pattern { find: "OU", replace: "ৌ", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }], replace: "ঔ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "ঔ" }] },
    Pattern { find: "O", replace: "ো", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }], replace: "ও" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "ও" }] },
    Pattern { find: "phl", replace: "ফ্ল", rules: &[] },
    Pattern { find: "pT", replace: "প্ট", rules: &[] },
    Pattern { find: "pt", replace: "প্ত", rules: &[] },
    Pattern { find: "pn", replace: "প্ন", rules: &[] },
    Pattern { find: "pp", replace: "প্প", rules: &[] },
    Pattern { find: "pl", replace: "প্ল", rules: &[] },
    Pattern { find: "ps", replace: "প্স", rules: &[] },
    Pattern { find: "ph", replace: "ফ", rules: &[] },
    Pattern { find: "fl", replace: "ফ্ল", rules: &[] },
    Pattern { find: "f", replace: "ফ", rules: &[] },
    Pattern { find: "p", replace: "প", rules: &[] },
    Pattern { find: "rri`", replace: "ৃ", rules: &[] },
    Pattern { find: "rri", replace: "ৃ", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }], replace: "ঋ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "ঋ" }] },
    Pattern { find: "rrZ", replace: "রর‍্য", rules: &[] },
    Pattern { find: "rry", replace: "রর‍্য", rules: &[] },
    Pattern { find: "rZ", replace: "র‍্য", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("r"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("y"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("w"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("x"), negate: true }], replace: "্র্য" }] },
    Pattern { find: "ry", replace: "র‍্য", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("r"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("y"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("w"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("x"), negate: true }], replace: "্র্য" }] },
    Pattern { find: "rr", replace: "রর", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Vowel, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("r"), negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Punctuation, negate: true }], replace: "র্" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("r"), negate: true }], replace: "্রর" }] },
    Pattern { find: "Rg", replace: "ড়্গ", rules: &[] },
    Pattern { find: "Rh", replace: "ঢ়", rules: &[] },
    Pattern { find: "R", replace: "ড়", rules: &[] },
    Pattern { find: "r", replace: "র", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("r"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("y"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("w"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("x"), negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("Z"), negate: true }], replace: "্র" }] },
    Pattern { find: "shch", replace: "শ্ছ", rules: &[] },
    Pattern { find: "ShTh", replace: "ষ্ঠ", rules: &[] },
    Pattern { find: "Shph", replace: "ষ্ফ", rules: &[] },
    Pattern { find: "Sch", replace: "শ্ছ", rules: &[] },
    Pattern { find: "skl", replace: "স্ক্ল", rules: &[] },
    Pattern { find: "skh", replace: "স্খ", rules: &[] },
    Pattern { find: "sth", replace: "স্থ", rules: &[] },
    Pattern { find: "sph", replace: "স্ফ", rules: &[] },
    Pattern { find: "shc", replace: "শ্চ", rules: &[] },
    Pattern { find: "sht", replace: "শ্ত", rules: &[] },
    Pattern { find: "shn", replace: "শ্ন", rules: &[] },
    Pattern { find: "shm", replace: "শ্ম", rules: &[] },
    Pattern { find: "shl", replace: "শ্ল", rules: &[] },
    Pattern { find: "Shk", replace: "ষ্ক", rules: &[] },
    Pattern { find: "ShT", replace: "ষ্ট", rules: &[] },
    Pattern { find: "ShN", replace: "ষ্ণ", rules: &[] },
    Pattern { find: "Shp", replace: "ষ্প", rules: &[] },
    Pattern { find: "Shf", replace: "ষ্ফ", rules: &[] },
    Pattern { find: "Shm", replace: "ষ্ম", rules: &[] },
    Pattern { find: "spl", replace: "স্প্ল", rules: &[] },
    Pattern { find: "sk", replace: "স্ক", rules: &[] },
    Pattern { find: "Sc", replace: "শ্চ", rules: &[] },
    Pattern { find: "sT", replace: "স্ট", rules: &[] },
    Pattern { find: "st", replace: "স্ত", rules: &[] },
    Pattern { find: "sn", replace: "স্ন", rules: &[] },
    Pattern { find: "sp", replace: "স্প", rules: &[] },
    Pattern { find: "sf", replace: "স্ফ", rules: &[] },
    Pattern { find: "sm", replace: "স্ম", rules: &[] },
    Pattern { find: "sl", replace: "স্ল", rules: &[] },
    Pattern { find: "sh", replace: "শ", rules: &[] },
    Pattern { find: "Sc", replace: "শ্চ", rules: &[] },
    Pattern { find: "St", replace: "শ্ত", rules: &[] },
    Pattern { find: "Sn", replace: "শ্ন", rules: &[] },
    Pattern { find: "Sm", replace: "শ্ম", rules: &[] },
    Pattern { find: "Sl", replace: "শ্ল", rules: &[] },
    Pattern { find: "Sh", replace: "ষ", rules: &[] },
    Pattern { find: "s", replace: "স", rules: &[] },
    Pattern { find: "S", replace: "শ", rules: &[] },
    Pattern { find: "oo`", replace: "ু", rules: &[] },
    Pattern { find: "oo", replace: "ু", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "উ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "উ" }] },
    Pattern { find: "o`", replace: "", rules: &[] },
    Pattern { find: "oZ", replace: "অ্য", rules: &[] },
    Pattern { find: "o", replace: "", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Vowel, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("o"), negate: true }], replace: "ও" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Vowel, negate: false }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("o"), negate: false }], replace: "অ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "অ" }] },
    Pattern { find: "tth", replace: "ত্থ", rules: &[] },
    Pattern { find: "t``", replace: "ৎ", rules: &[] },
    Pattern { find: "TT", replace: "ট্ট", rules: &[] },
    Pattern { find: "Tm", replace: "ট্ম", rules: &[] },
    Pattern { find: "Th", replace: "ঠ", rules: &[] },
    Pattern { find: "tn", replace: "ত্ন", rules: &[] },
    Pattern { find: "tm", replace: "ত্ম", rules: &[] },
    Pattern { find: "th", replace: "থ", rules: &[] },
    Pattern { find: "tt", replace: "ত্ত", rules: &[] },
    Pattern { find: "T", replace: "ট", rules: &[] },
    Pattern { find: "t", replace: "ত", rules: &[] },
    Pattern { find: "aZ", replace: "অ্যা", rules: &[] },
    Pattern { find: "AZ", replace: "অ্যা", rules: &[] },
    Pattern { find: "a`", replace: "া", rules: &[] },
    Pattern { find: "A`", replace: "া", rules: &[] },
    Pattern { find: "a", replace: "া", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "আ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("a"), negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "য়া" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Exact("a"), negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "আ" }] },
    Pattern { find: "i`", replace: "ি", rules: &[] },
    Pattern { find: "i", replace: "ি", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ই" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ই" }] },
    Pattern { find: "I`", replace: "ী", rules: &[] },
    Pattern { find: "I", replace: "ী", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঈ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঈ" }] },
    Pattern { find: "u`", replace: "ু", rules: &[] },
    Pattern { find: "u", replace: "ু", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "উ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "উ" }] },
    Pattern { find: "U`", replace: "ূ", rules: &[] },
    Pattern { find: "U", replace: "ূ", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঊ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঊ" }] },
    Pattern { find: "ee`", replace: "ী", rules: &[] },
    Pattern { find: "ee", replace: "ী", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঈ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "ঈ" }] },
    Pattern { find: "e`", replace: "ে", rules: &[] },
    Pattern { find: "e", replace: "ে", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "এ" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Exact("`"), negate: true }], replace: "এ" }] },
    Pattern { find: "z", replace: "য", rules: &[] },
    Pattern { find: "Z", replace: "্য", rules: &[] },
    Pattern { find: "y", replace: "্য", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: true }, MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: true }], replace: "য়" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "ইয়" }] },
    Pattern { find: "Y", replace: "য়", rules: &[] },
    Pattern { find: "q", replace: "ক", rules: &[] },
    Pattern { find: "w", replace: "ও", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }, MatchPredicate { kind: PredicateKind::Suffix, scope: Scope::Vowel, negate: false }], replace: "ওয়" }, ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Consonant, negate: false }], replace: "্ব" }] },
    Pattern { find: "x", replace: "ক্স", rules: &[ConditionalRule { matches: &[MatchPredicate { kind: PredicateKind::Prefix, scope: Scope::Punctuation, negate: false }], replace: "এক্স" }] },
    Pattern { find: ":`", replace: ":", rules: &[] },
    Pattern { find: ":", replace: "ঃ", rules: &[] },
    Pattern { find: "^`", replace: "^", rules: &[] },
    Pattern { find: "^", replace: "ঁ", rules: &[] },
    Pattern { find: ",,", replace: "্‌", rules: &[] },
    Pattern { find: ",", replace: ",", rules: &[] },
    Pattern { find: "$", replace: "৳", rules: &[] },
    Pattern { find: "`", replace: "", rules: &[] },
];

/// Returns the canonical rule table in its original order.
pub fn all() -> &'static [Pattern] {
    &PATTERNS
}

