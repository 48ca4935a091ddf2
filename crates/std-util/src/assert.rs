/// Unwraps the `Err` side of a result, panicking with the `Ok` value
/// otherwise.
///
/// A predicate method on the error may be named after the expression:
/// `assert_err!(table.validate(), is_missing_metadata)` also asserts that
/// `err.is_missing_metadata()` holds.
#[macro_export]
macro_rules! assert_err {
    ($e:expr, $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error satisfying `{}`; actual={}",
            stringify!($pred),
            err
        );
        err
    }};
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(actual) => panic!("expected `Err`; actual=Ok({:?})", actual),
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({})", err),
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None"),
        }
    };
}

#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(actual) => panic!("expected `None`; actual=Some({:?})", actual),
        }
    };
}
