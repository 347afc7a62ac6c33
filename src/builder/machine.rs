//! Builder for constructing validated drivers.

use crate::builder::error::BuildError;
use crate::core::{Fsm, State};
use crate::validation::{validate_table, ViolationStrategy};
use stillwater::validation::Validation;
use tracing::warn;

/// Builder that checks a state table before handing out an [`Fsm`].
///
/// # Example
///
/// ```rust
/// use tablefsm::builder::{BuildError, FsmBuilder};
/// use tablefsm::core::State;
/// use tablefsm::validation::ViolationStrategy;
///
/// let a = State::new(0, "A", None);
/// let b = State::new(3, "B", None);
/// let table = [&a, &b];
///
/// let rejected = FsmBuilder::new(&table)
///     .on_violation(ViolationStrategy::Reject)
///     .build();
/// assert!(matches!(rejected, Err(BuildError::InvalidTable(_))));
///
/// let fsm = FsmBuilder::new(&table)
///     .on_violation(ViolationStrategy::Ignore)
///     .build()
///     .unwrap();
/// assert_eq!(fsm.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FsmBuilder<'a> {
    table: &'a [&'a State<'a>],
    on_violation: ViolationStrategy,
}

impl<'a> FsmBuilder<'a> {
    /// Create a builder over `table`. Violations are logged by default.
    pub fn new(table: &'a [&'a State<'a>]) -> Self {
        Self {
            table,
            on_violation: ViolationStrategy::default(),
        }
    }

    /// Set how table violations are handled.
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Validate the table and build the driver.
    /// Returns an error only under [`ViolationStrategy::Reject`].
    pub fn build(self) -> Result<Fsm<'a>, BuildError> {
        if let Validation::Failure(violations) = validate_table(self.table) {
            match self.on_violation {
                ViolationStrategy::Reject => {
                    return Err(BuildError::InvalidTable(
                        violations.iter().cloned().collect(),
                    ));
                }
                ViolationStrategy::Warn => {
                    for violation in violations.iter() {
                        warn!(%violation, "state table violation");
                    }
                }
                ViolationStrategy::Ignore => {}
            }
        }

        Ok(Fsm::new(self.table))
    }
}
