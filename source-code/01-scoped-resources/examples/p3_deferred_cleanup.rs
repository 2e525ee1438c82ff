//! Pattern 3: Deferred Cleanup
//! Example: Deferred Actions and Resources Share One LIFO Order
//!
//! Run with: cargo run --example p3_deferred_cleanup

use scoped_resource_patterns::{ExitStack, Resource};

fn main() {
    println!("=== Mixed Entries, One Release Order ===\n");

    {
        let mut stack = ExitStack::new();
        stack.defer(|| println!("Deferred: remove scratch file"));
        stack.push(Resource::enter("Database"));
        stack.defer(|| println!("Deferred: flush buffers"));
        stack.push(Resource::enter("Socket"));
        println!("Registered {} cleanup entries", stack.len());
    }

    println!("\n=== Transferring Responsibility ===\n");

    let survivors = {
        let mut stack = ExitStack::new();
        stack.push(Resource::enter("Cache"));
        stack.push(Resource::enter("Log"));
        stack.pop_all() // outlives the scope that entered the resources
    };
    println!("Original scope ended, {} entries still pending", survivors.len());
    drop(survivors);

    println!("\nDeferred cleanup example completed");
}
