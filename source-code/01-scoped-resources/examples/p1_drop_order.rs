//! Pattern 1: Deterministic Drop Order
//! Example: Locals Drop in Reverse Declaration Order
//!
//! Run with: cargo run --example p1_drop_order

struct Noisy(&'static str);

impl Drop for Noisy {
    fn drop(&mut self) {
        println!("Drop {}.", self.0);
    }
}

fn count_to(limit: u32) {
    let _guard = Noisy("early-exit guard");
    for i in 0u32..10 {
        if i == limit {
            println!("Reached {}, returning early", limit);
            return; // guard still drops
        }
    }
}

fn main() {
    println!("=== Reverse Drop Order ===\n");
    {
        let _a = Noisy("a");
        let _b = Noisy("b");
        let _c = Noisy("c");
        println!("Scope body done, dropping locals:");
    } // _c, _b, _a dropped here, in that order

    println!("\n=== Drop on Early Exit ===");
    count_to(2);

    println!("\nDrop order example completed");
}
