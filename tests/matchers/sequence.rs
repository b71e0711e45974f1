use fre::patterns::*;

use super::test_matches;

#[test]
fn two_chars() {
    let aa = char('a') + char('a');
    test_matches("aa", &aa, 2);
    test_matches("aaa", &aa, 2);
    test_matches("a", &aa, None);
    test_matches("", &aa, None);
}

#[test]
fn failed_second_half_rolls_back() {
    test_matches("ac", &(char('a') + char('b')), None);
}

#[test]
fn nested_sequence() {
    let abc = char('a') + (char('b') + char('c'));
    test_matches("abc", &abc, 3);
    test_matches("abcde", &abc, 3);
    test_matches("", &abc, None);
    test_matches("ab", &abc, None);
    test_matches("abeccsd", &abc, None);
}

#[test]
fn sequence_of_intervals() {
    let az = char('a') + char('z');
    test_matches("az", &az, 2);
    test_matches("azss", &az, 2);
    test_matches("", &az, None);
    test_matches("!aaaa", &az, None);

    let az_lower = az + lower();
    test_matches("azaa", &az_lower, 3);
    test_matches("az!a", &az_lower, None);
}

#[test]
fn no_backtracking_into_first_half() {
    // The repetition takes every 'a', leaving none for the trailing 'a'.
    let greedy = char('a').repeat(1..) + char('a');
    test_matches("aaa", &greedy, None);
}

#[test]
fn then_is_add() {
    let added = char('x') + digit();
    let chained = char('x').then(digit());
    for src in ["x1", "x", "1", "xa", ""] {
        assert_eq!(fre::match_str(&added, src), fre::match_str(&chained, src));
    }
}
