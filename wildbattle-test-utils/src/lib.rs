mod data_store;
mod error_assert;
mod log_assert;
mod rng;
mod test_session_builder;

pub use data_store::{
    TestDataStore,
    test_creature,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
    assert_illegal_transition,
};
pub use log_assert::assert_new_logs_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_session,
};
pub use test_session_builder::TestSessionBuilder;
