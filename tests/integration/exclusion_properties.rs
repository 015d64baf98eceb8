//! Property-based tests for exclusion verdicts and digest determinism

use fingerprint::exclude::{parse_rule, ExclusionRules, PathPredicate};
use fingerprint::scan::digest::{digest_bytes, digest_reader, DigestAlgorithm};
use proptest::prelude::*;

const RULES: &[&str] = &[
    r"/\.[^/]+$",
    r"~$",
    "glob:*.log",
    "glob:build/**",
    "suffix:.bak",
    r"^\./tmp",
];

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z.~]{1,6}|build|tmp|x\\.log|y\\.bak", 0..4)
        .prop_map(|segments| format!("./{}", segments.join("/")))
}

fn rule_subset() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(RULES.to_vec(), 0..=RULES.len()).prop_shuffle()
}

proptest! {
    /// Verdict is true iff some single rule matches
    #[test]
    fn excluded_iff_any_rule_matches(rules in rule_subset(), path in path_strategy()) {
        let set = ExclusionRules::parse(&rules).unwrap();
        let any = rules
            .iter()
            .any(|rule| parse_rule(rule).unwrap().matches(&path));
        prop_assert_eq!(set.excluded(&path), any);
    }

    /// Reordering rules never changes the verdict
    #[test]
    fn rule_order_does_not_matter(rules in rule_subset(), path in path_strategy()) {
        let forward = ExclusionRules::parse(&rules).unwrap();
        let mut reversed_rules = rules.clone();
        reversed_rules.reverse();
        let reversed = ExclusionRules::parse(&reversed_rules).unwrap();
        prop_assert_eq!(forward.excluded(&path), reversed.excluded(&path));
    }

    /// Same bytes, same digest; streaming agrees with one-shot
    #[test]
    fn digest_is_deterministic(content in prop::collection::vec(any::<u8>(), 0..4096)) {
        for algorithm in [DigestAlgorithm::Md5, DigestAlgorithm::Blake3] {
            let one_shot = digest_bytes(&content, algorithm);
            prop_assert_eq!(&one_shot, &digest_bytes(&content, algorithm));
            prop_assert_eq!(&one_shot, &digest_reader(content.as_slice(), algorithm).unwrap());
        }
    }

    /// Appending a byte changes the digest
    #[test]
    fn appended_byte_changes_digest(content in prop::collection::vec(any::<u8>(), 0..1024), extra in any::<u8>()) {
        let mut longer = content.clone();
        longer.push(extra);
        prop_assert_ne!(
            digest_bytes(&content, DigestAlgorithm::Md5),
            digest_bytes(&longer, DigestAlgorithm::Md5)
        );
    }
}
