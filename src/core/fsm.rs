//! The table-driven FSM driver.
//!
//! [`Fsm`] is a cursor over a borrowed, fixed-length table of [`State`]
//! references. Each call to [`Fsm::step`] executes the current state's
//! behavior and honors the returned index as a forced transition.

use super::state::State;
use thiserror::Error;
use tracing::{debug, trace};

/// Signed form of "no current state", as returned by
/// [`Fsm::current_index_raw`].
pub const NO_INDEX: i32 = -1;

/// Errors reported by the validated cursor operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("State index {index} out of range (table holds {count} states)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// What a single [`Fsm::step`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The table is empty; nothing was executed.
    Inert,

    /// The behavior asked for no change, or named the current index.
    Stayed { requested: i32 },

    /// The cursor moved to a new table entry.
    Transitioned { from: Option<usize>, to: usize },

    /// The behavior named an index past the end of the table.
    Ignored { requested: i32 },
}

impl Step {
    /// Whether this step changed the current state.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Execute-driven state machine over a borrowed state table.
///
/// The table is borrowed for the driver's whole lifetime, so it (and every
/// state in it) is guaranteed to outlive the driver. The driver never
/// allocates.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Fsm, State, Step};
///
/// fn advance() -> i32 {
///     1
/// }
///
/// fn hold() -> i32 {
///     -1
/// }
///
/// let boot = State::new(0, "Boot", Some(&advance));
/// let run = State::new(1, "Run", Some(&hold));
/// let table = [&boot, &run];
///
/// let mut fsm = Fsm::new(&table);
/// assert_eq!(fsm.current_index(), Some(0));
///
/// assert_eq!(fsm.step(), Step::Transitioned { from: Some(0), to: 1 });
/// assert_eq!(fsm.current().map(|s| s.name()), Some("Run"));
///
/// assert_eq!(fsm.step(), Step::Stayed { requested: -1 });
/// assert_eq!(fsm.current_index(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Fsm<'a> {
    table: &'a [&'a State<'a>],
    current: Option<&'a State<'a>>,
    current_index: Option<usize>,
}

impl<'a> Fsm<'a> {
    /// Create a driver over `table`, starting at its first entry.
    ///
    /// An empty table leaves the driver without a current state.
    pub fn new(table: &'a [&'a State<'a>]) -> Self {
        let first = table.first().copied();
        Self {
            table,
            current: first,
            current_index: first.map(|_| 0),
        }
    }

    /// Execute the current state's behavior and apply any transition it
    /// requests.
    ///
    /// If no state is current, the driver first falls back to the table's
    /// first entry. The behavior's result is treated as a direct table
    /// index; it moves the cursor only when it is in range and differs
    /// from the current index. Everything else is a silent no-op.
    pub fn step(&mut self) -> Step {
        let current = match self.current {
            Some(state) => state,
            None => match self.table.first() {
                Some(&first) => {
                    trace!(state = first.name(), "initializing to first table entry");
                    self.current = Some(first);
                    self.current_index = Some(0);
                    first
                }
                None => return Step::Inert,
            },
        };

        let requested = current.execute();

        let Ok(next) = usize::try_from(requested) else {
            trace!(state = current.name(), requested, "no transition requested");
            return Step::Stayed { requested };
        };

        if Some(next) == self.current_index {
            trace!(state = current.name(), requested, "transition to self ignored");
            return Step::Stayed { requested };
        }

        let Some(&target) = self.table.get(next) else {
            trace!(
                state = current.name(),
                requested,
                count = self.table.len(),
                "out-of-range transition ignored"
            );
            return Step::Ignored { requested };
        };

        let from = self.current_index;
        debug!(from = current.name(), to = target.name(), index = next, "state transition");
        self.current = Some(target);
        self.current_index = Some(next);

        Step::Transitioned { from, to: next }
    }

    /// The active state, if any.
    pub fn current(&self) -> Option<&'a State<'a>> {
        self.current
    }

    /// Overwrite the active state without touching the index.
    ///
    /// This is unchecked: the caller keeps `current_index` consistent if it
    /// matters. Prefer [`Fsm::force_transition`].
    pub fn set_current(&mut self, state: Option<&'a State<'a>>) {
        self.current = state;
    }

    /// Position of the active state in the table, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Position of the active state, or [`NO_INDEX`] when there is none.
    ///
    /// An index past `i32::MAX` (only reachable through
    /// [`Fsm::set_current_index`]) saturates to `i32::MAX`.
    pub fn current_index_raw(&self) -> i32 {
        match self.current_index {
            Some(index) => i32::try_from(index).unwrap_or(i32::MAX),
            None => NO_INDEX,
        }
    }

    /// Overwrite the active index without touching the active state.
    ///
    /// Unchecked against both the table and [`Fsm::current`]. Prefer
    /// [`Fsm::force_transition`].
    pub fn set_current_index(&mut self, index: Option<usize>) {
        self.current_index = index;
    }

    /// Jump to `table[index]`, setting both the active state and its index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablefsm::core::{Fsm, FsmError, State};
    ///
    /// let a = State::new(0, "A", None);
    /// let b = State::new(1, "B", None);
    /// let table = [&a, &b];
    /// let mut fsm = Fsm::new(&table);
    ///
    /// let state = fsm.force_transition(1).unwrap();
    /// assert_eq!(state.name(), "B");
    /// assert_eq!(fsm.current_index(), Some(1));
    ///
    /// assert_eq!(
    ///     fsm.force_transition(5).unwrap_err(),
    ///     FsmError::IndexOutOfRange { index: 5, count: 2 }
    /// );
    /// ```
    pub fn force_transition(&mut self, index: usize) -> Result<&'a State<'a>, FsmError> {
        let target = self
            .table
            .get(index)
            .copied()
            .ok_or(FsmError::IndexOutOfRange {
                index,
                count: self.table.len(),
            })?;

        debug!(to = target.name(), index, "forced transition");
        self.current = Some(target);
        self.current_index = Some(index);
        Ok(target)
    }

    /// Return the cursor to where construction put it.
    pub fn reset(&mut self) {
        *self = Self::new(self.table);
    }

    /// Number of states in the table. Fixed for the driver's lifetime.
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// The borrowed state table.
    pub fn table(&self) -> &'a [&'a State<'a>] {
        self.table
    }
}
