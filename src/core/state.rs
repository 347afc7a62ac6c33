//! State descriptors and the behavior contract they carry.
//!
//! A [`State`] is an immutable record: a small integer id, a diagnostic
//! name, and an optional [`Behavior`]. States are built once, usually as
//! `static` data, and are only ever observed by the driver through shared
//! references.

use std::fmt;

/// Returned by a behavior (or by a state without one) to request no
/// forced transition. Any negative value has the same meaning.
pub const NO_TRANSITION: i32 = -1;

/// Logic executed while a state is active.
///
/// The return value is a transition hint: a non-negative value requests a
/// move to the state at that position in the table, a negative value asks
/// to stay put.
///
/// Every `Fn() -> i32 + Send + Sync` implements this trait, so plain
/// functions and closures with captured context both work.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use tablefsm::core::Behavior;
///
/// struct Countdown(AtomicU32);
///
/// impl Behavior for Countdown {
///     fn execute(&self) -> i32 {
///         if self.0.fetch_sub(1, Ordering::Relaxed) == 1 {
///             1
///         } else {
///             -1
///         }
///     }
/// }
///
/// let countdown = Countdown(AtomicU32::new(2));
/// assert_eq!(countdown.execute(), -1);
/// assert_eq!(countdown.execute(), 1);
/// ```
pub trait Behavior: Send + Sync {
    /// Run the behavior and return the requested next index, or a
    /// negative value for no forced change.
    fn execute(&self) -> i32;
}

impl<F> Behavior for F
where
    F: Fn() -> i32 + Send + Sync,
{
    fn execute(&self) -> i32 {
        self()
    }
}

/// One entry of a state table.
///
/// `id` is carried for diagnostics only. The driver resolves transitions by
/// table position, never by id.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::State;
///
/// fn blink() -> i32 {
///     1
/// }
///
/// static ON: State<'static> = State::new(0, "On", Some(&blink));
/// static OFF: State<'static> = State::new(1, "Off", None);
///
/// assert_eq!(ON.id(), 0);
/// assert_eq!(ON.name(), "On");
/// assert_eq!(ON.execute(), 1);
/// assert_eq!(OFF.execute(), -1);
/// ```
#[derive(Clone, Copy)]
pub struct State<'a> {
    id: u8,
    name: &'a str,
    behavior: Option<&'a dyn Behavior>,
}

impl<'a> State<'a> {
    /// Create a state descriptor.
    pub const fn new(id: u8, name: &'a str, behavior: Option<&'a dyn Behavior>) -> Self {
        Self { id, name, behavior }
    }

    /// The state's id.
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// The state's diagnostic name.
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Whether a behavior is attached.
    pub const fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }

    /// Run the attached behavior.
    ///
    /// Returns [`NO_TRANSITION`] when no behavior was supplied.
    pub fn execute(&self) -> i32 {
        match self.behavior {
            Some(behavior) => behavior.execute(),
            None => NO_TRANSITION,
        }
    }
}

impl fmt::Debug for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("has_behavior", &self.has_behavior())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    fn go_to_two() -> i32 {
        2
    }

    #[test]
    fn getters_return_stored_values() {
        let state = State::new(7, "Heating", Some(&go_to_two));

        assert_eq!(state.id(), 7);
        assert_eq!(state.name(), "Heating");
        assert!(state.has_behavior());
    }

    #[test]
    fn execute_returns_behavior_result() {
        let state = State::new(0, "Idle", Some(&go_to_two));
        assert_eq!(state.execute(), 2);
    }

    #[test]
    fn execute_without_behavior_requests_no_transition() {
        let state = State::new(3, "Passive", None);

        assert!(!state.has_behavior());
        assert_eq!(state.execute(), NO_TRANSITION);
    }

    #[test]
    fn closure_behavior_can_capture_context() {
        let calls = AtomicI32::new(0);
        let behavior = || calls.fetch_add(1, Ordering::SeqCst);
        let state = State::new(0, "Counting", Some(&behavior));

        assert_eq!(state.execute(), 0);
        assert_eq!(state.execute(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_output_names_the_state() {
        let state = State::new(4, "Cooling", None);
        let rendered = format!("{state:?}");

        assert!(rendered.contains("Cooling"));
        assert!(rendered.contains("has_behavior: false"));
    }

    #[test]
    fn static_states_are_supported() {
        static DONE: State<'static> = State::new(9, "Done", Some(&go_to_two));

        assert_eq!(DONE.execute(), 2);
    }
}
