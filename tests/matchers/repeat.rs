use fre::patterns::*;

use super::test_matches;

#[test]
fn char_between_one_and_four() {
    let repeat = char('a').repeat(1..=4);
    test_matches("aaa", &repeat, 3);
    test_matches("", &repeat, None);
    test_matches("abb", &repeat, 1);
    test_matches("a", &repeat, 1);
    test_matches("bba", &repeat, None);
    test_matches("aaaa", &repeat, 4);
    test_matches("aaaaa", &repeat, 4);
}

#[test]
fn interval_between_one_and_four() {
    let repeat = lower().repeat(1..=4);
    test_matches("abdj", &repeat, 4);
    test_matches("", &repeat, None);
    test_matches("a46546", &repeat, 1);
    test_matches("46456a", &repeat, None);
    test_matches("amzkldjal", &repeat, 4);
}

#[test]
fn zero_minimum_always_matches() {
    let repeat = char('a').repeat(..=3);
    test_matches("", &repeat, 0);
    test_matches("b", &repeat, 0);
    test_matches("aab", &repeat, 2);
}

#[test]
fn unbounded_maximum() {
    let repeat = char('a').repeat(2..);
    test_matches("a", &repeat, None);
    test_matches("aa", &repeat, 2);
    test_matches(&"a".repeat(500), &repeat, 500);
}

#[test]
fn exact_count() {
    let repeat = char('a') * 3;
    test_matches("aa", &repeat, None);
    test_matches("aaa", &repeat, 3);
    test_matches("aaaa", &repeat, 3);
}

#[test]
fn optional() {
    let repeat = one_of("+-").optional() + digit();
    test_matches("-1", &repeat, 2);
    test_matches("1", &repeat, 1);
    test_matches("--1", &repeat, None);
}

#[test]
fn repeated_sequence_keeps_last_whole_iteration() {
    // The third "ab" is cut short; the repetition ends after the second.
    let repeat = (char('a') + char('b')).repeat(1..);
    test_matches("ababa", &repeat, 4);
}

#[test]
fn shortfall_rolls_back_to_origin() {
    let repeat = (char('a') + char('b')).repeat(3..);
    test_matches("ababa", &repeat, None);

    let prefixed = char('x') + repeat;
    test_matches("xabab", &prefixed, None);
}

#[test]
fn nested_repeat() {
    let words = (char(' ').repeat(..) + lower().repeat(1..)).repeat(2..);
    test_matches("foo bar baz qux? foo", &words, 15);
    test_matches("foo? bar", &words, None);
}

#[test]
fn zero_width_inner() {
    test_matches("bbb", &char('a').optional().repeat(..), 0);
    test_matches("bbb", &char('a').optional().repeat(5..=9), 0);
    test_matches("aab", &char('a').repeat(..).repeat(2..), 2);
}

#[test]
fn slice_bounds() {
    let repeat = char('a').repeat("1:4");
    test_matches("aaaaa", &repeat, 4);
    test_matches("", &repeat, None);
    test_matches("aaaaa", &char('a').repeat("2:"), 5);
    test_matches("aaaaa", &char('a').repeat(":2"), 2);
    test_matches("", &char('a').repeat(":"), 0);
}

#[test]
fn exclusive_upper_bound() {
    test_matches("aaaa", &(char('a') * (1..3)), 2);
    test_matches("aaaa", &char('a').repeat(..3), 2);
    test_matches("baaa", &(char('a') * (1..3)), None);
    assert!(char('a').try_repeat(..0).is_err());
}

#[test]
fn operator_forms_agree() {
    let forms = [
        char('a').repeat(1..=4),
        char('a') * (1..=4),
        (1..=4u32) * char('a'),
        repeat(1..=4, char('a')),
        char('a').repeat("1:4"),
        char('a') * (1..5),
        char('a').repeat(fre::RepeatBounds::new(1, Some(4)).unwrap()),
    ];
    for src in ["", "a", "aaaa", "aaaaa", "ba"] {
        let expected = fre::match_str(&forms[0], src);
        for form in &forms[1..] {
            assert_eq!(fre::match_str(form, src), expected, "{form:?} on {src:?}");
        }
    }
}
