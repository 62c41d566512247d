use std::{
    borrow::Cow,
    fmt::Display,
    mem,
};

use itertools::Itertools;

/// Trait for objects that can be added directly to the battle log.
///
/// Automatically implemented for types that implement [`Display`].
pub trait BattleLoggable {
    fn log<'s>(&'s self, items: &mut Vec<Cow<'s, str>>);
}

impl<T> BattleLoggable for T
where
    T: Display,
{
    fn log(&self, parts: &mut Vec<Cow<'_, str>>) {
        parts.push(Cow::Owned(format!("{self}")))
    }
}

/// A battle event that is added to the [`EventLog`].
///
/// This object should not be constructed directly. Instead, use the [`battle_event`] macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleEvent(String);

impl BattleEvent {
    pub fn from_parts(parts: &[&dyn BattleLoggable]) -> Self {
        let mut log_parts = Vec::with_capacity(parts.len());
        for part in parts {
            part.log(&mut log_parts);
        }
        Self(log_parts.into_iter().join("|"))
    }
}

/// Constructs a [`BattleEvent`] to be added to the [`EventLog`].
///
/// Every entry is a `|`-separated list whose first part names the event.
#[macro_export]
macro_rules! battle_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::BattleEvent::from_parts(&[$(&$arg),*])
    }};
}

/// A log of battle events for a single session.
#[derive(Debug, Default)]
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new messages since the last call to [`Self::read_out`].
    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.logs.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: BattleEvent) {
        ::log::trace!("battle event: {}", event.0);
        self.logs.push(event.0)
    }

    /// Returns an iterator over all logs.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_ref())
    }

    /// Reads out any new logs that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.logs.len());
        self.logs[i..].iter().map(|s| s.as_ref())
    }
}
