/// Asserts that a value matches a pattern, with an optional `if` guard.
///
/// The value is included in the panic message. In the guard form the value is
/// matched by reference, so pattern bindings used in the guard are references.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            other => ::core::panic!(
                "{other:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {{
        let value = $expr;
        match (&value) {
            $pat if $guard => (),
            #[allow(unused_variables, reason = "bindings are only read by the guard")]
            $pat => ::core::panic!(
                "{value:?} matches {} but fails the guard {}",
                ::core::stringify!($pat),
                ::core::stringify!($guard)
            ),
            _ => ::core::panic!(
                "{value:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn matches_pattern() {
        assert_matches!(Some(7), Some(_));
        assert_matches!(Ok::<_, ()>(42), Ok(x) if *x == 42);
    }

    #[test]
    #[should_panic = "does not match"]
    fn panics_on_mismatch() {
        assert_matches!(Option::<i32>::None, Some(_));
    }

    #[test]
    #[should_panic = "fails the guard"]
    fn panics_on_failed_guard() {
        assert_matches!(Ok::<_, ()>(42), Ok(x) if *x == 43);
    }
}
