//! Pattern 3: Composing Wrappers
//! Example: Stacked Wrappers Keep the Innermost Identity
//!
//! Run with: cargo run --example p3_stacked_wrappers

use function_wrapper_patterns::{Describe, DocumentedFn};

fn main() {
    println!("=== Two Layers of Wrapping ===\n");

    let base = DocumentedFn::new("render", "Render one frame.", || println!("rendered"));

    let logged = base.wrap_with(|| {
        println!("log: calling render");
        base.call();
    });

    let guarded = logged.wrap_with(|| {
        println!("guard: checking preconditions");
        logged.call();
    });

    println!("Calling the outermost wrapper:");
    guarded.call();

    println!("\nEvery layer reports the original:");
    for layer in [&base as &dyn Describe, &logged, &guarded] {
        println!("name: {} / doc: {}", layer.name(), layer.doc());
    }

    println!("\n=== Key Points ===");
    println!("- wrap_with copies metadata from the callable being wrapped");
    println!("- Stacking therefore preserves the innermost original's identity");
    println!("- Behavior composes outermost-first; identity stays put");
}
