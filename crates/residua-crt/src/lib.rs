//! # residua-crt
//!
//! Generalized Chinese Remainder Theorem solver.
//!
//! This crate provides:
//! - Residue classes with a pairwise merge that does not require coprime
//!   periods (`Congruence`)
//! - Ordered, origin-tagged systems of congruences (`ConstraintSet`)
//! - Optional parallel tree reduction for large systems via rayon
//!
//! All arithmetic is arbitrary precision, so the combined period may grow
//! far beyond 64 bits.
//!
//! ## Example
//!
//! ```
//! use residua_crt::{Congruence, ConstraintSet};
//!
//! let set = ConstraintSet::from_congruences([
//!     Congruence::from_i64(3, 2).unwrap(),
//!     Congruence::from_i64(5, 3).unwrap(),
//!     Congruence::from_i64(7, 2).unwrap(),
//! ]);
//! assert_eq!(set.solve().unwrap().to_i64(), Some(23));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod congruence;
pub mod constraint_set;
pub mod error;

#[cfg(test)]
mod proptests;

pub use congruence::Congruence;
pub use constraint_set::{Constraint, ConstraintSet, SolverConfig};
pub use error::CrtError;
