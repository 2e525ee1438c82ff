//! Pattern 2: Grouped Release with an Exit Stack
//! Example: Enter Several Resources, Release in Reverse
//!
//! Run with: cargo run --example p2_exit_stack

use scoped_resource_patterns::{ExitStack, Resource};

fn main() {
    println!("=== Grouped Scoped Resources ===\n");

    {
        let mut stack = ExitStack::new();
        stack.push(Resource::enter("Python"));
        stack.push(Resource::enter("C"));
        stack.push(Resource::enter("C++"));
    } // stack drops: exits run in reverse entry order

    println!("\nAll resources released.");
}
