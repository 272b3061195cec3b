//! Caller-contract checks for the dense algebra.
//!
//! Size mismatches, out-of-range indices and iterators compared across containers are
//! programming errors, not recoverable conditions. `assert_bounds!` turns them into panics
//! whenever `debug_assertions` are on or the `bounds-checking` feature is enabled, and
//! compiles to nothing otherwise.

/// Panic with a logged message if `cond` is false and bounds checking is active.
macro_rules! assert_bounds {
    ($cond:expr $(,)?) => {
        assert_bounds!($cond, "bounds check failed: {}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "bounds-checking")) && !$cond {
            tracing::error!(condition = stringify!($cond), "bounds check failed");
            panic!($($arg)+);
        }
    };
}

/// Whether `assert_bounds!` is active in this build.
pub const fn bounds_checking_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "bounds-checking"))
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check_is_silent() {
        let n = 3;
        assert_bounds!(n == 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bounds check failed")]
    fn failing_check_panics_in_debug() {
        let n = 2;
        assert_bounds!(n == 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sizes differ: 2 vs 3")]
    fn custom_message_is_forwarded() {
        let (a, b) = (2usize, 3usize);
        assert_bounds!(a == b, "sizes differ: {} vs {}", a, b);
    }
}
