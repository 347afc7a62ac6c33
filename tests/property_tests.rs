//! Property-based tests for the FSM driver.
//!
//! These tests use proptest to verify the cursor invariants hold across
//! many randomly generated tables and behavior results.

use proptest::prelude::*;
use tablefsm::core::{Behavior, Fsm, State, Step, TransitionHistory};

/// Run `body` against a table whose entry `i` always returns `targets[i]`.
fn with_table<R>(targets: &[i32], body: impl FnOnce(&[&State<'_>]) -> R) -> R {
    let behaviors: Vec<_> = targets.iter().map(|&target| move || target).collect();
    let states: Vec<State<'_>> = behaviors
        .iter()
        .enumerate()
        .map(|(index, behavior)| {
            State::new(index as u8, "Generated", Some(behavior as &dyn Behavior))
        })
        .collect();
    let table: Vec<&State<'_>> = states.iter().collect();
    body(&table)
}

fn expected_next(current: usize, requested: i32, count: usize) -> usize {
    match usize::try_from(requested) {
        Ok(next) if next < count && next != current => next,
        _ => current,
    }
}

prop_compose! {
    fn arbitrary_targets()(targets in prop::collection::vec(-3i32..12, 1..8)) -> Vec<i32> {
        targets
    }
}

proptest! {
    #[test]
    fn construction_selects_first_entry(targets in arbitrary_targets()) {
        with_table(&targets, |table| {
            let fsm = Fsm::new(table);
            prop_assert_eq!(fsm.current_index(), Some(0));
            prop_assert!(std::ptr::eq(fsm.current().unwrap(), table[0]));
            prop_assert_eq!(fsm.count(), table.len());
            Ok(())
        })?;
    }

    #[test]
    fn step_follows_transition_rule(targets in arbitrary_targets(), steps in 1usize..20) {
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);
            let mut expected = 0usize;

            for _ in 0..steps {
                let requested = targets[expected];
                let step = fsm.step();
                let next = expected_next(expected, requested, table.len());

                prop_assert_eq!(step.is_transition(), next != expected);
                expected = next;
                prop_assert_eq!(fsm.current_index(), Some(expected));
            }
            Ok(())
        })?;
    }

    #[test]
    fn cursor_and_index_stay_in_sync(targets in arbitrary_targets(), steps in 0usize..20) {
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);

            for _ in 0..steps {
                fsm.step();
                let index = fsm.current_index().unwrap();
                prop_assert!(index < table.len());
                prop_assert!(std::ptr::eq(fsm.current().unwrap(), table[index]));
            }
            Ok(())
        })?;
    }

    #[test]
    fn count_is_constant(targets in arbitrary_targets(), steps in 0usize..20) {
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);
            for _ in 0..steps {
                fsm.step();
                prop_assert_eq!(fsm.count(), targets.len());
            }
            Ok(())
        })?;
    }

    #[test]
    fn out_of_range_requests_never_move(target in 8i32..1000, len in 1usize..8) {
        let targets = vec![target; len];
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);
            prop_assert_eq!(fsm.step(), Step::Ignored { requested: target });
            prop_assert_eq!(fsm.current_index(), Some(0));
            Ok(())
        })?;
    }

    #[test]
    fn force_transition_matches_table(targets in arbitrary_targets(), index in 0usize..10) {
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);
            let result = fsm.force_transition(index);

            if index < table.len() {
                prop_assert!(std::ptr::eq(result.unwrap(), table[index]));
                prop_assert_eq!(fsm.current_index(), Some(index));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(fsm.current_index(), Some(0));
            }
            Ok(())
        })?;
    }

    #[test]
    fn history_path_matches_visited_indices(targets in arbitrary_targets(), steps in 1u64..20) {
        with_table(&targets, |table| {
            let mut fsm = Fsm::new(table);
            let mut history = TransitionHistory::new();
            let mut visited = vec![0usize];

            for n in 0..steps {
                let step = fsm.step();
                if let Step::Transitioned { to, .. } = step {
                    visited.push(to);
                }
                history = history.observe(&step, &fsm, n);
            }

            if visited.len() > 1 {
                prop_assert_eq!(history.path(), visited);
            } else {
                prop_assert!(history.path().is_empty());
            }
            Ok(())
        })?;
    }
}
