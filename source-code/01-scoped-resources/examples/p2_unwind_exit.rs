//! Pattern 2: Grouped Release with an Exit Stack
//! Example: Exits Still Run When the Scope Panics
//!
//! Run with: cargo run --example p2_unwind_exit

use std::panic;

use scoped_resource_patterns::{ExitStack, Resource};

fn main() {
    println!("=== Release During Unwinding ===\n");

    let result = panic::catch_unwind(|| {
        let mut stack = ExitStack::new();
        stack.push(Resource::enter("Python"));
        stack.push(Resource::enter("C"));
        stack.push(Resource::enter("C++"));
        panic!("scope failed");
    });

    match result {
        Ok(()) => println!("\nScope finished normally"),
        Err(_) => println!("\nScope panicked, but every exit ran first"),
    }

    println!("\n=== Key Points ===");
    println!("- Drop runs during unwinding, so release is guaranteed");
    println!("- The panic is not suppressed; the caller still observes it");
    println!("- Release order under panic matches the normal reverse order");
}
