//! Tablefsm: an execute-driven, table-based finite state machine
//!
//! Tablefsm is a small FSM core for embedded-style control logic. A fixed
//! table of states is borrowed by a driver that repeatedly runs the current
//! state's behavior; the behavior itself decides whether to jump elsewhere
//! by returning the table index of the next state.
//!
//! # Core Concepts
//!
//! - **State**: Immutable descriptor with an id, a diagnostic name and an
//!   optional `Behavior`
//! - **Fsm**: Cursor over a borrowed table; `step()` runs one behavior
//! - **Validation**: Optional build-time checks that report every table
//!   problem at once
//!
//! # Example
//!
//! ```rust
//! use tablefsm::core::{Fsm, State, Step};
//!
//! fn warm_up() -> i32 {
//!     1
//! }
//!
//! fn running() -> i32 {
//!     -1
//! }
//!
//! static WARM_UP: State<'static> = State::new(0, "WarmUp", Some(&warm_up));
//! static RUNNING: State<'static> = State::new(1, "Running", Some(&running));
//! static TABLE: [&State<'static>; 2] = [&WARM_UP, &RUNNING];
//!
//! let mut fsm = Fsm::new(&TABLE);
//! assert_eq!(fsm.current().unwrap().name(), "WarmUp");
//!
//! assert_eq!(fsm.step(), Step::Transitioned { from: Some(0), to: 1 });
//! assert_eq!(fsm.step(), Step::Stayed { requested: -1 });
//! assert_eq!(fsm.current_index(), Some(1));
//! ```

pub mod builder;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, FsmBuilder};
pub use core::{Behavior, Fsm, FsmError, State, Step};
pub use validation::{TableViolation, ViolationStrategy};
