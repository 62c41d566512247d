mod context;
mod error;
mod wildbattle_error;

pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use wildbattle_error::{
    GeneralError,
    IllegalTransitionError,
    NotFoundError,
    general_error,
    illegal_transition_error,
    not_found_error,
};
