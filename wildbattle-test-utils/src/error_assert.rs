use std::fmt::Debug;

use anyhow::Error;
use wildbattle::IllegalTransitionError;

/// [`assert`]s that the result is an [`Error`] with the given message.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str)
where
    T: Debug,
{
    match result {
        Ok(value) => panic!("expected error \"{message}\", got {value:?}"),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), message),
    }
}

/// [`assert`]s that the result is an [`Error`] whose message chain contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str)
where
    T: Debug,
{
    match result {
        Ok(value) => panic!("expected error containing \"{message}\", got {value:?}"),
        Err(err) => {
            let got = format!("{err:#}");
            assert!(got.contains(message), "\"{got}\" does not contain \"{message}\"");
        }
    }
}

/// [`assert`]s that the result is an [`IllegalTransitionError`] with the given message.
#[track_caller]
pub fn assert_illegal_transition<T>(result: Result<T, Error>, message: &str)
where
    T: Debug,
{
    match result {
        Ok(value) => panic!("expected illegal transition \"{message}\", got {value:?}"),
        Err(err) => {
            assert!(
                err.is::<IllegalTransitionError>(),
                "expected illegal transition, got {err:#}"
            );
            pretty_assertions::assert_eq!(err.to_string(), message);
        }
    }
}
