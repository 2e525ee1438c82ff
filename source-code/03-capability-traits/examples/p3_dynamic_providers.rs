//! Pattern 3: Heterogeneous Providers
//! Example: One Contract, Many Providers, Dynamic Dispatch
//!
//! Run with: cargo run --example p3_dynamic_providers

use capability_trait_patterns::{
    demonstration_table, Arithmetic, Calculator, SaturatingCalculator,
};

fn main() {
    println!("=== Every Provider, Same Expressions ===");

    let providers: Vec<(&str, Box<dyn Arithmetic>)> = vec![
        ("plain", Box::new(Calculator)),
        ("saturating", Box::new(SaturatingCalculator)),
    ];

    for (label, provider) in &providers {
        println!("\n[{label}]");
        for line in demonstration_table(provider.as_ref()) {
            println!("{line}");
        }
    }

    println!("\n=== Where They Differ ===");
    println!("plain mul would overflow near i64::MAX");
    println!(
        "saturating mul clamps: {} * 2 = {}",
        i64::MAX,
        SaturatingCalculator.mul(i64::MAX, 2)
    );
}
