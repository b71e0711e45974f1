use fre::patterns::*;

use super::test_matches;

#[test]
fn either_branch() {
    let a_or_b = char('a') | char('b');
    test_matches("a", &a_or_b, 1);
    test_matches("b", &a_or_b, 1);
    test_matches("c", &a_or_b, None);
    test_matches("", &a_or_b, None);
}

#[test]
fn first_success_wins() {
    // Both branches match "aaa"; the shorter first branch is kept.
    let short_first = char('a') | char('a').repeat(1..);
    test_matches("aaa", &short_first, 1);

    let long_first = char('a').repeat(1..) | char('a');
    test_matches("aaa", &long_first, 3);
}

#[test]
fn second_branch_starts_from_original_position() {
    let words = literal("foo") | literal("fob");
    test_matches("fob", &words, 3);

    let seqs = (char('a') + char('b')) | (char('a') + char('c'));
    test_matches("ac", &seqs, 2);
}

#[test]
fn failure_comes_from_second_branch() {
    let out = (literal("ab") | literal("cd")).match_str("ax");
    assert!(!out.is_success());
    assert_eq!(out.position(), 0);
}

#[test]
fn or_is_bitor() {
    let piped = lower() | digit();
    let chained = lower().or(digit());
    for src in ["a", "1", "_", ""] {
        assert_eq!(piped.match_str(src), chained.match_str(src));
    }
}
