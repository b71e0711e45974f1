/// Asserts that `$value` matches `$pat` and binds the pattern's variables.
#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $value:expr, $msg:literal $(, $($args:tt)+)?) => {
        let actual = $value;
        #[allow(unused_variables)]
        let matched = matches!(&actual, $pat);
        if !matched {
            panic!(
                "assertion failed: matches!({}, {});\n{}",
                stringify!($value),
                stringify!($pat),
                format_args!($msg, actual = actual, $($($args)+)?),
            );
        }
        let $pat = actual else { unreachable!() };
    };
    ($pat:pat = $value:expr) => {
        $crate::assert_let!($pat = $value, " actual: {actual:?}")
    };
}
