//! Behaviors with Captured Context
//!
//! This example demonstrates stateful behaviors, validated construction
//! and transition history.
//!
//! Key concepts:
//! - Implementing `Behavior` on a struct
//! - `FsmBuilder` with a violation strategy
//! - Recording transitions with `TransitionHistory`
//!
//! Run with: cargo run --example counter_behavior

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use tablefsm::builder::FsmBuilder;
use tablefsm::core::{Behavior, State, TransitionHistory};
use tablefsm::validation::ViolationStrategy;
use tracing_subscriber::EnvFilter;

/// Requests `next` once `limit` calls have been made.
struct Counter {
    calls: AtomicU32,
    limit: NonZeroU32,
    next: i32,
}

impl Counter {
    fn new(limit: NonZeroU32, next: i32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            limit,
            next,
        }
    }
}

impl Behavior for Counter {
    fn execute(&self) -> i32 {
        let calls = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if calls % self.limit.get() == 0 {
            self.next
        } else {
            -1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Behavior Example ===\n");

    let (Some(fill_limit), Some(drain_limit)) = (NonZeroU32::new(4), NonZeroU32::new(2)) else {
        return;
    };
    let filling = Counter::new(fill_limit, 1);
    let draining = Counter::new(drain_limit, 0);

    let fill = State::new(0, "Filling", Some(&filling));
    let drain = State::new(1, "Draining", Some(&draining));
    let table = [&fill, &drain];

    let mut fsm = match FsmBuilder::new(&table)
        .on_violation(ViolationStrategy::Reject)
        .build()
    {
        Ok(fsm) => fsm,
        Err(error) => {
            eprintln!("invalid table: {error}");
            return;
        }
    };

    let mut history = TransitionHistory::new();
    for n in 0..12 {
        let step = fsm.step();
        history = history.observe(&step, &fsm, n);
    }

    println!("Visited indices: {:?}", history.path());
    match history.to_json() {
        Ok(json) => println!("History: {json}"),
        Err(error) => eprintln!("could not serialize history: {error}"),
    }

    println!("\n=== Example Complete ===");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_requests_next_every_limit_calls() {
        let counter = Counter::new(NonZeroU32::new(2).unwrap(), 1);

        assert_eq!(counter.execute(), -1);
        assert_eq!(counter.execute(), 1);
        assert_eq!(counter.execute(), -1);
    }

    #[test]
    fn counter_with_limit_one_always_requests_next() {
        let counter = Counter::new(NonZeroU32::MIN, 3);

        assert_eq!(counter.execute(), 3);
        assert_eq!(counter.execute(), 3);
    }
}
