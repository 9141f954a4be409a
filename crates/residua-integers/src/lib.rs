//! # residua-integers
//!
//! Arbitrary precision integers for the Residua congruence solver.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - The extended Euclidean algorithm (`Integer::extended_gcd`)
//! - Floor modulo that always lands in `[0, m)` (`Integer::mod_floor`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated, so products of many periods
//!   never overflow

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::{ExtendedGcd, Integer};
