//! Table checks using Validation.

use crate::core::State;
use crate::validation::violations::TableViolation;
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a table check: success, or every violation found.
pub type TableValidation = Validation<(), NonEmptyVec<TableViolation>>;

/// Validate a state table, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for a table whose ids match their
/// positions. Divergent ids are legal for the driver, which never looks
/// ids up, but usually mean a behavior's returned index does not name the
/// state its author intended.
///
/// # Example
///
/// ```rust
/// use stillwater::validation::Validation;
/// use tablefsm::core::State;
/// use tablefsm::validation::{validate_table, TableViolation};
///
/// let a = State::new(0, "A", None);
/// let b = State::new(0, "B", None);
///
/// match validate_table(&[&a, &b]) {
///     Validation::Failure(violations) => {
///         assert!(violations
///             .iter()
///             .any(|v| matches!(v, TableViolation::DuplicateId { id: 0, .. })));
///     }
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate_table(table: &[&State<'_>]) -> TableValidation {
    let checks = vec![
        check_not_empty(table),
        check_size(table),
        check_ids_match_positions(table),
        check_unique_ids(table),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_not_empty(table: &[&State<'_>]) -> TableValidation {
    if table.is_empty() {
        Validation::fail(TableViolation::EmptyTable)
    } else {
        Validation::success(())
    }
}

fn check_size(table: &[&State<'_>]) -> TableValidation {
    if i32::try_from(table.len()).is_err() {
        Validation::fail(TableViolation::TooLarge { len: table.len() })
    } else {
        Validation::success(())
    }
}

fn check_ids_match_positions(table: &[&State<'_>]) -> TableValidation {
    let checks: Vec<TableValidation> = table
        .iter()
        .enumerate()
        .map(|(index, state)| {
            if usize::from(state.id()) == index {
                Validation::success(())
            } else {
                Validation::fail(TableViolation::IdMismatch {
                    index,
                    id: state.id(),
                })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn check_unique_ids(table: &[&State<'_>]) -> TableValidation {
    let mut first_seen: HashMap<u8, usize> = HashMap::new();
    let mut checks: Vec<TableValidation> = Vec::new();

    for (index, state) in table.iter().enumerate() {
        let check = match first_seen.get(&state.id()) {
            Some(&first) => Validation::fail(TableViolation::DuplicateId {
                id: state.id(),
                first,
                second: index,
            }),
            None => {
                first_seen.insert(state.id(), index);
                Validation::success(())
            }
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
