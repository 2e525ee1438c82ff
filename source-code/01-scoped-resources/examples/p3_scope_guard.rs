//! Pattern 3: Deferred Cleanup
//! Example: A Scope Guard with Disarm
//!
//! Run with: cargo run --example p3_scope_guard

use scoped_resource_patterns::ScopeGuard;

fn commit_transfer() {
    let guard = ScopeGuard::new(|| println!("Rolling back transfer"));
    println!("Transfer steps all succeeded");
    guard.disarm(); // success path: no rollback
    println!("Transfer committed");
}

fn abort_transfer() {
    let _guard = ScopeGuard::new(|| println!("Rolling back transfer"));
    println!("Transfer step failed, leaving scope");
} // rollback runs here

fn main() {
    println!("=== Disarmed on Success ===");
    commit_transfer();

    println!("\n=== Armed on Failure ===");
    abort_transfer();

    println!("\n=== Key Points ===");
    println!("- The guard's action runs unless it is explicitly disarmed");
    println!("- Success paths disarm; every other path rolls back");
}
