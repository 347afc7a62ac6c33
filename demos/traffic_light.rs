//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic, statically declared state table.
//!
//! Key concepts:
//! - `state_table!` for zero-allocation static tables
//! - Plain functions as behaviors
//! - Transition logging through `tracing`
//!
//! Run with: RUST_LOG=tablefsm=debug cargo run --example traffic_light

use std::sync::atomic::{AtomicU32, Ordering};
use tablefsm::core::Fsm;
use tablefsm::state_table;
use tracing_subscriber::EnvFilter;

static TICKS: AtomicU32 = AtomicU32::new(0);

/// Hold each light for `ticks` calls, then request `next`.
fn after(ticks: u32, next: i32) -> i32 {
    if TICKS.fetch_add(1, Ordering::Relaxed) + 1 >= ticks {
        TICKS.store(0, Ordering::Relaxed);
        next
    } else {
        -1
    }
}

fn red() -> i32 {
    after(3, 1)
}

fn green() -> i32 {
    after(3, 2)
}

fn yellow() -> i32 {
    after(1, 0)
}

state_table! {
    static LIGHTS = [
        0 => "Red", red;
        1 => "Green", green;
        2 => "Yellow", yellow;
    ];
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut fsm = Fsm::new(LIGHTS);

    for tick in 0..14 {
        let step = fsm.step();
        let light = fsm.current().map_or("<none>", |state| state.name());
        println!("tick {tick:>2}: {light:<6} {step:?}");
    }

    println!("\n=== Example Complete ===");
}
