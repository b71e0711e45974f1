/// Evaluates a pattern expression with [`patterns`](crate::patterns) in scope.
///
/// ```
/// let number = fre::pattern!(one_of("+-").optional() + digit().repeat(1..));
///
/// assert!(number.fullmatch("-42").is_match());
/// assert!(!number.fullmatch("4-2").is_match());
/// ```
#[macro_export]
macro_rules! pattern {
    ($expr:expr $(,)?) => {{
        #[allow(unused)]
        use $crate::patterns::*;
        $expr
    }};
}

/// Defines functions returning patterns, with [`patterns`](crate::patterns)
/// in scope inside their bodies.
///
/// ```
/// fre::define_pattern!(
///     fn identifier(max_len: u32) {
///         (alpha() | underscore())
///             + (alphanumeric() | underscore()).repeat(..=max_len.saturating_sub(1))
///     }
/// );
///
/// assert!(identifier(4).fullmatch("_foo").is_match());
/// assert!(!identifier(4).fullmatch("_foobar").is_match());
/// assert_eq!(identifier(4).match_str("_foobar").matched(), "_foo");
/// ```
#[macro_export]
macro_rules! define_pattern {
    { $(
        $vis:vis fn $Name:ident (
            $($arg:tt $($arg1:ident)* $(: $Arg:ty)?),* $(,)?
        ) $body:block
    )* } => { $(
        $vis fn $Name ( $($arg $($arg1)* $(: $Arg)?),* ) ->
            $crate::Pattern<impl $crate::MatchCursor>
            { $crate::pattern!($body) }
    )* };
}
