//! Pattern 4: Practical Wrappers
//! Example: Instrumentation That Keeps the Original's Identity
//!
//! Run with: cargo run --example p4_instrumented_wrapper

use std::cell::Cell;
use std::time::Instant;

use function_wrapper_patterns::{Describe, DocumentedFn};

fn main() {
    println!("=== Counting Calls ===\n");

    let work = DocumentedFn::new("compact", "Compact the index.", || {
        println!("compact pass finished");
    });

    let calls = Cell::new(0u32);
    let counted = work.wrap_with(|| {
        calls.set(calls.get() + 1);
        work.call();
    });

    counted.call();
    counted.call();
    println!("'{}' ran {} times", counted.name(), calls.get());

    println!("\n=== Timing a Call ===\n");

    let timed = work.wrap_with(|| {
        let start = Instant::now();
        work.call();
        println!("'{}' took {:?}", work.name(), start.elapsed());
    });
    timed.call();

    println!("\nInstrumented wrapper example completed");
}
