//! Table violations and handling strategies.

use thiserror::Error;

/// Problems found in a state table before it is handed to a driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("State table is empty; the driver will stay inert")]
    EmptyTable,

    #[error("State at index {index} has id {id}; transitions resolve by index, not id")]
    IdMismatch { index: usize, id: u8 },

    #[error("Id {id} is used by both index {first} and index {second}")]
    DuplicateId { id: u8, first: usize, second: usize },

    #[error("State table holds {len} entries; indices past i32::MAX are unreachable")]
    TooLarge { len: usize },
}

/// Strategy for handling table violations at build time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViolationStrategy {
    /// Refuse to build the driver
    Reject,

    /// Build anyway, logging each violation as a warning
    #[default]
    Warn,

    /// Build anyway, silently
    Ignore,
}
