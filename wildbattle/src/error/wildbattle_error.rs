use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// An action that the battle session cannot accept in its current state.
///
/// The session is left untouched when this error is returned.
#[derive(Error, Debug)]
#[error("cannot {action}: {reason}")]
pub struct IllegalTransitionError {
    action: String,
    reason: String,
}

impl IllegalTransitionError {
    /// Constructs a new illegal transition error.
    pub fn new<A, R>(action: A, reason: R) -> Self
    where
        A: Display,
        R: Display,
    {
        Self {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The rejected action.
    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`IllegalTransitionError`].
#[track_caller]
pub fn illegal_transition_error<A, R>(action: A, reason: R) -> Error
where
    A: Display,
    R: Display,
{
    IllegalTransitionError::new(action, reason).wrap_error()
}

#[cfg(test)]
mod wildbattle_error_test {
    use crate::error::{
        IllegalTransitionError,
        NotFoundError,
        illegal_transition_error,
        not_found_error,
    };

    #[test]
    fn formats_messages() {
        assert_eq!(not_found_error("move tackle").to_string(), "move tackle not found");
        assert_eq!(
            illegal_transition_error("use recovery", "player health is not zero").to_string(),
            "cannot use recovery: player health is not zero"
        );
    }

    #[test]
    fn keeps_concrete_type() {
        let err = illegal_transition_error("confirm a move", "no battle is in progress");
        assert!(err.is::<IllegalTransitionError>());
        assert!(!err.is::<NotFoundError>());
        assert_eq!(
            err.downcast_ref::<IllegalTransitionError>()
                .map(|err| err.action()),
            Some("confirm a move")
        );
    }
}
