//! Build-time validation of state tables.
//!
//! The driver accepts any table and never reports errors while stepping.
//! This module checks a table up front using Stillwater's `Validation`
//! type, so every problem is reported in one pass instead of one at a time.
//!
//! # Example
//!
//! ```rust
//! use stillwater::validation::Validation;
//! use tablefsm::core::State;
//! use tablefsm::validation::validate_table;
//!
//! let idle = State::new(0, "Idle", None);
//! let busy = State::new(1, "Busy", None);
//!
//! assert!(matches!(validate_table(&[&idle, &busy]), Validation::Success(_)));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_table, TableValidation};
pub use violations::{TableViolation, ViolationStrategy};
