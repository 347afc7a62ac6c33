//! Transition history tracking.
//!
//! The driver itself keeps no history. Callers that want an audit trail feed
//! each [`Step`] into a [`TransitionHistory`], which records only the steps
//! that actually moved the cursor.

use super::fsm::{Fsm, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition between table entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Index transitioned from, if the driver had one
    pub from: Option<usize>,
    /// Index transitioned to
    pub to: usize,
    /// Name of the state left, if known
    pub from_name: Option<String>,
    /// Name of the state entered
    pub to_name: String,
    /// Caller-supplied step counter at the time of the transition
    pub step: u64,
    /// When the transition was observed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable history of transitions.
///
/// `record` and `observe` return a new history and leave the original
/// untouched.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{Fsm, State, TransitionHistory};
///
/// fn next() -> i32 {
///     1
/// }
///
/// let a = State::new(0, "A", Some(&next));
/// let b = State::new(1, "B", None);
/// let table = [&a, &b];
/// let mut fsm = Fsm::new(&table);
///
/// let mut history = TransitionHistory::new();
/// for n in 0..3 {
///     let step = fsm.step();
///     history = history.observe(&step, &fsm, n);
/// }
///
/// assert_eq!(history.transitions().len(), 1);
/// assert_eq!(history.path(), vec![0, 1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return a new history with `record` appended.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(record);
        Self { transitions }
    }

    /// Record `step` if it was a transition, reading names from `fsm`'s table.
    ///
    /// Non-transition steps return an unchanged copy.
    pub fn observe(&self, step: &Step, fsm: &Fsm<'_>, step_number: u64) -> Self {
        let Step::Transitioned { from, to } = *step else {
            return self.clone();
        };

        let table = fsm.table();
        let name_at = |index: usize| table.get(index).map(|state| state.name().to_string());

        self.record(TransitionRecord {
            from,
            to,
            from_name: from.and_then(&name_at),
            to_name: name_at(to).unwrap_or_default(),
            step: step_number,
            timestamp: Utc::now(),
        })
    }

    /// Indices visited: the first `from` (when known), then every `to`.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(from) = self.transitions.first().and_then(|first| first.from) {
            path.push(from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Render the history as JSON for diagnostics.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
