//! Pattern 2: Metadata Propagation
//! Example: The Wrapper Reports the Original's Identity
//!
//! Run with: cargo run --example p2_preserved_metadata

use function_wrapper_patterns::{Describe, DocumentedFn};

fn main() {
    println!("=== Wrapping Without Losing Identity ===\n");

    let foo = DocumentedFn::new("foo", "This is foo.", || println!("foo"));

    // Replacement body: adds behavior, then delegates to the original.
    let bar = foo.wrap_with(|| {
        println!("bar");
        foo.call();
    });

    println!("Calling the wrapper:");
    bar.call();

    println!("\nInspecting the wrapper:");
    println!("name: {}", bar.name());
    println!("doc: {}", bar.doc());
}
