//! Core state table types and the FSM driver.
//!
//! This module contains the whole transition mechanism:
//! - State descriptors and the `Behavior` contract
//! - The execute-driven `Fsm` cursor and its `Step` outcomes
//! - Opt-in, immutable transition history
//!
//! The driver and states never allocate; only the history does.

mod fsm;
mod history;
mod state;

pub use fsm::{Fsm, FsmError, Step, NO_INDEX};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{Behavior, State, NO_TRANSITION};
