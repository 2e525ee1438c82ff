//! # Capability Trait Patterns
//!
//! A namespace of four operations (add, subtract, multiply, divide) stands
//! in for a named capability wherever that capability is expected. Rust has
//! no implicit structural conformance, so the conformance is declared: the
//! namespace stays a module of free functions, and a zero-sized adapter
//! implements the contract by delegation.
//!
//! ## Patterns Covered
//!
//! 1. **A Named Capability Contract**
//!    - Four operations behind one trait
//!
//! 2. **A Namespace as the Provider**
//!    - Free functions satisfy the contract via an adapter
//!
//! 3. **Heterogeneous Providers**
//!    - One contract, many providers, dynamic dispatch
//!
//! 4. **A Fallible Capability Surface**
//!    - Typed errors instead of a panicking divide
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_capability_contract
//! cargo run --example p2_module_namespace
//! cargo run --example p3_dynamic_providers
//! cargo run --example p4_checked_division
//! ```

use thiserror::Error;

/// Four-operation arithmetic capability over integer operands.
///
/// `div` is integer division and panics on a zero divisor exactly like the
/// underlying operator; see [`CheckedArithmetic`] for the fallible surface.
pub trait Arithmetic {
    fn add(&self, a: i64, b: i64) -> i64;
    fn sub(&self, a: i64, b: i64) -> i64;
    fn mul(&self, a: i64, b: i64) -> i64;
    fn div(&self, a: i64, b: i64) -> i64;
}

/// The namespace: plain free functions with contract-compatible signatures.
pub mod implementation {
    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }

    pub fn sub(a: i64, b: i64) -> i64 {
        a - b
    }

    pub fn mul(a: i64, b: i64) -> i64 {
        a * b
    }

    pub fn div(a: i64, b: i64) -> i64 {
        a / b
    }
}

/// Declares that the [`implementation`] namespace satisfies [`Arithmetic`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Calculator;

impl Arithmetic for Calculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        implementation::add(a, b)
    }

    fn sub(&self, a: i64, b: i64) -> i64 {
        implementation::sub(a, b)
    }

    fn mul(&self, a: i64, b: i64) -> i64 {
        implementation::mul(a, b)
    }

    fn div(&self, a: i64, b: i64) -> i64 {
        implementation::div(a, b)
    }
}

/// Provider that clamps at the integer boundaries instead of overflowing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SaturatingCalculator;

impl Arithmetic for SaturatingCalculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        a.saturating_add(b)
    }

    fn sub(&self, a: i64, b: i64) -> i64 {
        a.saturating_sub(b)
    }

    fn mul(&self, a: i64, b: i64) -> i64 {
        a.saturating_mul(b)
    }

    fn div(&self, a: i64, b: i64) -> i64 {
        a.saturating_div(b)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: i64 },
}

/// Fallible division for callers that refuse to panic.
///
/// Blanket-implemented for every provider, so the checked surface comes for
/// free with the contract.
pub trait CheckedArithmetic: Arithmetic {
    fn try_div(&self, a: i64, b: i64) -> Result<i64, ArithmeticError> {
        if b == 0 {
            Err(ArithmeticError::DivisionByZero { dividend: a })
        } else {
            Ok(self.div(a, b))
        }
    }
}

impl<A: Arithmetic> CheckedArithmetic for A {}

/// The standard demonstration table, evaluated through any provider.
pub fn demonstration_table(provider: &dyn Arithmetic) -> Vec<String> {
    vec![
        format!("3 + 4 = {}", provider.add(3, 4)),
        format!("8 - 2 = {}", provider.sub(8, 2)),
        format!("4 * 5 = {}", provider.mul(4, 5)),
        format!("9 / 3 = {}", provider.div(9, 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contract {
        use super::*;

        fn table<A: Arithmetic>(provider: &A) -> [i64; 4] {
            [
                provider.add(3, 4),
                provider.sub(8, 2),
                provider.mul(4, 5),
                provider.div(9, 3),
            ]
        }

        #[test]
        fn generic_consumer_sees_the_expected_results() {
            assert_eq!(table(&Calculator), [7, 6, 20, 3]);
        }

        #[test]
        fn dyn_consumer_sees_the_expected_results() {
            assert_eq!(
                demonstration_table(&Calculator),
                ["3 + 4 = 7", "8 - 2 = 6", "4 * 5 = 20", "9 / 3 = 3"]
            );
        }

        #[test]
        fn adapter_matches_the_namespace() {
            assert_eq!(Calculator.add(3, 4), implementation::add(3, 4));
            assert_eq!(Calculator.sub(8, 2), implementation::sub(8, 2));
            assert_eq!(Calculator.mul(4, 5), implementation::mul(4, 5));
            assert_eq!(Calculator.div(9, 3), implementation::div(9, 3));
        }

        #[test]
        #[should_panic(expected = "divide by zero")]
        fn plain_division_by_zero_panics() {
            Calculator.div(1, 0);
        }
    }

    mod providers {
        use super::*;

        #[test]
        fn providers_agree_on_the_demonstration_table() {
            assert_eq!(
                demonstration_table(&Calculator),
                demonstration_table(&SaturatingCalculator)
            );
        }

        #[test]
        fn saturating_provider_clamps_at_the_boundary() {
            assert_eq!(SaturatingCalculator.add(i64::MAX, 1), i64::MAX);
            assert_eq!(SaturatingCalculator.sub(i64::MIN, 1), i64::MIN);
            assert_eq!(SaturatingCalculator.mul(i64::MAX, 2), i64::MAX);
            assert_eq!(SaturatingCalculator.div(i64::MIN, -1), i64::MAX);
        }
    }

    mod checked {
        use super::*;

        #[test]
        fn try_div_matches_plain_division() {
            assert_eq!(Calculator.try_div(9, 3), Ok(3));
        }

        #[test]
        fn zero_divisor_is_reported() {
            let err = Calculator.try_div(9, 0).unwrap_err();
            assert_eq!(err, ArithmeticError::DivisionByZero { dividend: 9 });
            assert_eq!(err.to_string(), "cannot divide 9 by zero");
        }

        #[test]
        fn every_provider_gets_the_checked_surface() {
            assert_eq!(
                SaturatingCalculator.try_div(9, 0),
                Err(ArithmeticError::DivisionByZero { dividend: 9 })
            );
        }
    }
}
