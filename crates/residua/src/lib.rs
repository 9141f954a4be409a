//! # Residua
//!
//! Solving systems of congruences over arbitrary precision integers.
//!
//! Residua finds the smallest non-negative integer satisfying a system of
//! congruences `t ≡ r_i (mod p_i)`, including systems whose periods share
//! factors, and reports when no such integer exists.
//!
//! ## Quick Start
//!
//! ```
//! use residua::prelude::*;
//!
//! let schedule = Schedule::parse("17,x,13,19").unwrap();
//! assert_eq!(schedule.lowest_time().unwrap(), Integer::new(3417));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use residua_crt as crt;
pub use residua_integers as integers;
pub use residua_schedule as schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use residua_crt::{Congruence, Constraint, ConstraintSet, CrtError, SolverConfig};
    pub use residua_integers::Integer;
    pub use residua_schedule::{BusList, Notes, Schedule, ScheduleError, ScheduleFormat};
}
