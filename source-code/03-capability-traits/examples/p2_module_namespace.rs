//! Pattern 2: A Namespace as the Provider
//! Example: Free Functions Satisfy the Contract via an Adapter
//!
//! Run with: cargo run --example p2_module_namespace

use capability_trait_patterns::{implementation, Arithmetic, Calculator};

fn main() {
    println!("=== Calling the Namespace Directly ===\n");
    println!("3 + 4 = {}", implementation::add(3, 4));
    println!("8 - 2 = {}", implementation::sub(8, 2));

    println!("\n=== The Same Namespace Behind the Contract ===\n");
    let provider: &dyn Arithmetic = &Calculator;
    println!("4 * 5 = {}", provider.mul(4, 5));
    println!("9 / 3 = {}", provider.div(9, 3));

    println!("\n=== Key Points ===");
    println!("- The namespace exposes compatible operation signatures");
    println!("- A zero-sized adapter declares the conformance explicitly");
    println!("- Callers that expect the contract accept the adapter anywhere");
}
