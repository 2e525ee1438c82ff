//! Pattern 1: A Named Capability Contract
//! Example: Four Operations Behind One Trait
//!
//! Run with: cargo run --example p1_capability_contract

use capability_trait_patterns::{Arithmetic, Calculator};

// Static dispatch: works with any provider of the capability.
fn print_table<A: Arithmetic>(provider: &A) {
    println!("3 + 4 = {}", provider.add(3, 4));
    println!("8 - 2 = {}", provider.sub(8, 2));
    println!("4 * 5 = {}", provider.mul(4, 5));
    println!("9 / 3 = {}", provider.div(9, 3));
}

fn main() {
    println!("=== The Arithmetic Capability ===\n");
    print_table(&Calculator);
}
