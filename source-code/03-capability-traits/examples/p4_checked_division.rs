//! Pattern 4: A Fallible Capability Surface
//! Example: Typed Errors Instead of a Panicking Divide
//!
//! Run with: cargo run --example p4_checked_division

use capability_trait_patterns::{ArithmeticError, Calculator, CheckedArithmetic};

fn main() {
    println!("=== Checked Division ===\n");

    match Calculator.try_div(9, 3) {
        Ok(quotient) => println!("9 / 3 = {}", quotient),
        Err(err) => println!("error: {}", err),
    }

    match Calculator.try_div(9, 0) {
        Ok(quotient) => println!("9 / 0 = {}", quotient),
        Err(err) => println!("error: {}", err),
    }

    let err = Calculator.try_div(7, 0).unwrap_err();
    assert_eq!(err, ArithmeticError::DivisionByZero { dividend: 7 });
    println!("\nThe error names the dividend: {:?}", err);

    println!("\n=== Key Points ===");
    println!("- The plain contract divides like the operator: zero panics");
    println!("- try_div turns the zero divisor into a typed, matchable error");
    println!("- Every provider gets the checked surface through one blanket impl");
}
