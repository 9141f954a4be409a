//! # residua-schedule
//!
//! Reads bus notes and turns them into congruence systems.
//!
//! The notes are two lines: the earliest time we could depart, and a
//! comma-separated list of bus ids where `x` marks an empty slot.
//!
//! - [`BusList`] answers which bus departs soonest after a given time
//! - [`Schedule`] finds the earliest time at which each bus leaves exactly
//!   as many minutes after it as its slot position

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bus;
pub mod error;
pub mod format;
pub mod notes;
pub mod schedule;

pub use bus::{Bus, BusList, Departure};
pub use error::ScheduleError;
pub use format::ScheduleFormat;
pub use notes::Notes;
pub use schedule::{Schedule, Slot};
