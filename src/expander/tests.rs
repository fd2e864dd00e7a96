use super::*;
use proptest::prelude::*;

fn range(variable: char, start: i64, end: i64) -> Rule {
    Rule::from_range(variable, start, end).unwrap()
}

#[test]
fn test_no_rules() {
    assert_eq!(expand("a-a", &[]), ["a-a"]);
}

#[test]
fn test_single_char_values() {
    assert_eq!(
        expand("pref-a-a-a-suf", &[range('a', 1, 2)]),
        ["pref-1-1-1-suf", "pref-2-2-2-suf"]
    );
}

#[test]
fn test_single_char_values_padded() {
    assert_eq!(
        expand("pref-aa-aaa-aaaa-suf", &[range('a', 1, 2)]),
        ["pref-01-001-0001-suf", "pref-02-002-0002-suf"]
    );
}

#[test]
fn test_multi_char_values() {
    let rule = Rule::from_values('a', ["one", "two"]).unwrap();
    assert_eq!(
        expand("pref-a-a-a-suf", &[rule]),
        ["pref-one-one-one-suf", "pref-two-two-two-suf"]
    );
}

#[test]
fn test_multi_char_values_padded() {
    let rule = Rule::from_values('a', ["one", "two"]).unwrap();
    assert_eq!(
        expand("pref-aa-aaa-aaaa-suf", &[rule]),
        ["pref-one-one-0one-suf", "pref-two-two-0two-suf"]
    );
}

#[test]
fn test_custom_pad_char() {
    let rule = range('a', 1, 1).with_pad_char('x');
    assert_eq!(
        expand("pref-aa-aaa-aaaa-suf", &[rule]),
        ["pref-x1-xx1-xxx1-suf"]
    );
}

#[test]
fn test_multiple_rules() {
    let rules = [range('a', 1, 2), range('b', 3, 4)];
    assert_eq!(
        expand("pref-a-b-a-b-suf", &rules),
        [
            "pref-1-3-1-3-suf",
            "pref-1-4-1-4-suf",
            "pref-2-3-2-3-suf",
            "pref-2-4-2-4-suf",
        ]
    );
}

#[test]
fn test_rule_order_sets_nesting_not_pattern_order() {
    // `b` appears first in the pattern but `a` is the outer loop.
    let rules = [range('a', 1, 2), range('b', 3, 4)];
    assert_eq!(expand("b-a", &rules), ["3-1", "4-1", "3-2", "4-2"]);
}

#[test]
fn test_three_rules() {
    let rules = [
        range('a', 1, 2),
        Rule::from_values('b', ["x", "y", "z"]).unwrap(),
        range('c', 0, 1),
    ];
    let result = expand("abc", &rules);
    assert_eq!(result.len(), 12);
    assert_eq!(result[0], "1x0");
    assert_eq!(result[1], "1x1");
    assert_eq!(result[2], "1y0");
    assert_eq!(result[11], "2z1");
}

#[test]
fn test_pattern_without_placeholders_ignores_rules() {
    let rules = [range('a', 1, 5), range('b', 1, 5)];
    assert_eq!(expand("plain", &rules), ["plain"]);
    assert_eq!(expansion_count("plain", &rules), 1);
}

#[test]
fn test_rule_absent_from_pattern_does_not_multiply() {
    let rules = [range('a', 1, 2), range('z', 1, 9)];
    assert_eq!(expand("a", &rules), ["1", "2"]);
}

#[test]
fn test_unmatched_placeholder_is_literal() {
    assert_eq!(expand("b-a", &[range('a', 1, 2)]), ["b-1", "b-2"]);
}

#[test]
fn test_value_wider_than_run_is_not_truncated() {
    let rule = Rule::from_values('a', ["12345"]).unwrap();
    assert_eq!(expand("[aa]", &[rule]), ["[12345]"]);
}

#[test]
fn test_empty_pattern() {
    assert_eq!(expand("", &[range('a', 1, 3)]), [""]);
}

#[test]
fn test_duplicate_values_are_kept() {
    let rule = Rule::from_values('a', ["x", "x"]).unwrap();
    assert_eq!(expand("a", &[rule]), ["x", "x"]);
}

#[test]
fn test_non_ascii_pattern() {
    let rule = Rule::from_values('é', [7]).unwrap();
    assert_eq!(expand("→éé←", &[rule]), ["→07←"]);
}

#[test]
fn test_iterator_is_exact_size() {
    let rules = [range('a', 1, 3), range('b', 1, 4)];
    let mut iter = expand_iter("a/b", &rules);
    assert_eq!(iter.len(), 12);
    iter.next();
    assert_eq!(iter.len(), 11);
    assert_eq!(iter.by_ref().count(), 11);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_without_used_rules_yields_once() {
    let mut iter = expand_iter("abc", &[]);
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next().as_deref(), Some("abc"));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_expansion_count() {
    let rules = [range('a', 1, 3), range('b', 1, 4), range('c', 1, 5)];
    assert_eq!(expansion_count("a-b", &rules), 12);
    assert_eq!(expansion_count("a-b-c", &rules), 60);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_wide_range_counts_and_streams_lazily() {
    let rules = [crate::parse_rule("a=0..100000000000").unwrap()];
    assert_eq!(expansion_count("x-a", &rules), 100_000_000_001);
    assert_eq!(expansion_count("x", &rules), 1);

    let mut iter = expand_iter("x-aa", &rules);
    assert_eq!(iter.len(), 100_000_000_001);
    assert_eq!(iter.next().as_deref(), Some("x-00"));
    assert_eq!(iter.next().as_deref(), Some("x-01"));
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        prop::sample::select(vec!['a', 'b', 'c']),
        prop::collection::vec("[0-9a-z]{0,4}", 1..4),
        prop::sample::select(vec!['0', '_', '*']),
    )
        .prop_map(|(variable, values, pad)| {
            Rule::from_values(variable, values).unwrap().with_pad_char(pad)
        })
}

proptest! {
    #[test]
    fn prop_placeholder_free_pattern_is_unchanged(
        pattern in "[d-z -]{0,12}",
        rules in prop::collection::vec(rule_strategy(), 0..4),
    ) {
        prop_assert_eq!(expand(&pattern, &rules), vec![pattern.clone()]);
    }

    #[test]
    fn prop_length_is_product_of_used_rules(
        a in rule_strategy(),
        b in rule_strategy(),
    ) {
        let a = Rule::from_values('a', a.values()).unwrap();
        let b = Rule::from_values('b', b.values()).unwrap();
        let expected = a.values().len() * b.values().len();
        let rules = [a, b];
        prop_assert_eq!(expand("x-a-b-a", &rules).len(), expected);
        prop_assert_eq!(expansion_count("x-a-b-a", &rules), expected);
    }

    #[test]
    fn prop_padding_shape(
        value in "[0-9a-z]{0,6}",
        width in 1usize..6,
        pad in prop::sample::select(vec!['0', '_', '*']),
    ) {
        let rule = Rule::from_values('a', [value.clone()]).unwrap().with_pad_char(pad);
        let pattern = "a".repeat(width);
        let result = expand(&pattern, &[rule]);
        let expected = if value.len() < width {
            format!("{}{}", pad.to_string().repeat(width - value.len()), value)
        } else {
            value.clone()
        };
        prop_assert_eq!(result, vec![expected]);
    }

    #[test]
    fn prop_cartesian_order(
        v in prop::collection::vec("[0-9]{1}", 2),
        w in prop::collection::vec("[0-9]{1}", 2),
    ) {
        let rules = [
            Rule::from_values('a', v.clone()).unwrap(),
            Rule::from_values('b', w.clone()).unwrap(),
        ];
        let expected: Vec<String> = v
            .iter()
            .flat_map(|x| w.iter().map(move |y| format!("{x}{y}")))
            .collect();
        prop_assert_eq!(expand("ab", &rules), expected);
    }
}
