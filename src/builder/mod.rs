//! Builder API for validated driver construction.
//!
//! This module provides a fluent builder that checks a state table before
//! creating an [`Fsm`], and a macro for declaring static tables with
//! minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;

use crate::core::{Fsm, State};
use crate::validation::ViolationStrategy;

/// Build a driver, rejecting any table that fails validation.
///
/// # Example
///
/// ```
/// use tablefsm::builder::strict;
/// use tablefsm::core::State;
///
/// let on = State::new(0, "On", None);
/// let off = State::new(1, "Off", None);
///
/// let table = [&on, &off];
/// let fsm = strict(&table).unwrap();
/// assert_eq!(fsm.count(), 2);
///
/// let misnumbered = State::new(4, "Off", None);
/// assert!(strict(&[&on, &misnumbered]).is_err());
/// ```
pub fn strict<'a>(table: &'a [&'a State<'a>]) -> Result<Fsm<'a>, BuildError> {
    FsmBuilder::new(table)
        .on_violation(ViolationStrategy::Reject)
        .build()
}
