//! Pattern 1: Deterministic Drop Order
//! Example: A Named Resource That Announces Enter and Exit
//!
//! Run with: cargo run --example p1_named_resource

use scoped_resource_patterns::Resource;

fn lookup(name: &str) {
    let resource = Resource::enter(name);
    if resource.name() == "missing" {
        println!("Nothing to do, leaving early");
        return; // exit line still prints
    }
    println!("Did some work with {}", resource.name());
}

fn main() {
    println!("=== Enter and Exit Pairing ===\n");
    {
        let python = Resource::enter("Python");
        println!("Working with {}...", python.name());
    }

    println!("\n=== Exit Runs on Early Return ===");
    lookup("C");
    lookup("missing");

    println!("\nNamed resource example completed");
}
