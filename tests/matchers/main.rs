use fre::MatchCursor;

mod choice;
mod repeat;
mod sequence;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Asserts that `matcher` run from the start of `src` stops at `end`, or fails
/// at position 0 when `end` is `None`.
#[track_caller]
fn test_matches(src: &str, matcher: &impl MatchCursor, end: impl Into<Option<usize>>) {
    init_tracing();
    let out = fre::match_str(matcher, src);
    match end.into() {
        Some(end) => {
            assert!(out.is_success(), "expected a match on {src:?}, got {out:?}");
            assert_eq!(out.position(), end, "wrong end position on {src:?}");
        }
        None => {
            assert!(!out.is_success(), "expected no match on {src:?}, got {out:?}");
            assert_eq!(out.position(), 0, "failure not rolled back on {src:?}");
        }
    }
}
