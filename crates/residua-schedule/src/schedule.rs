//! Bus schedules as congruence systems.
//!
//! Slot `i` holding bus `p` requires that bus to leave `i` minutes after
//! `t`, i.e. `t ≡ -i (mod p)`. Wildcard slots impose nothing and are not
//! part of the schedule at all.

use residua_crt::{Congruence, Constraint, ConstraintSet, CrtError, SolverConfig};
use residua_integers::Integer;
use tracing::debug;

use crate::error::ScheduleError;
use crate::format::ScheduleFormat;

/// A bus and the slot it occupies in the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Position in the bus line, which is also the required phase.
    pub position: usize,
    /// The bus period.
    pub period: Integer,
}

/// The in-service slots of a bus line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    slots: Vec<Slot>,
}

impl Schedule {
    /// Parses a bus line with the default format.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MalformedConstraint`] for a bad entry.
    pub fn parse(line: &str) -> Result<Self, ScheduleError> {
        Self::parse_with(line, &ScheduleFormat::default())
    }

    /// Parses a bus line with an explicit format.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MalformedConstraint`] for a bad entry.
    pub fn parse_with(line: &str, format: &ScheduleFormat) -> Result<Self, ScheduleError> {
        let slots = format
            .entries(line)
            .map(|entry| entry.map(|(position, period)| Slot { position, period }))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(target: "residua::schedule", slots = slots.len(), "parsed schedule");
        Ok(Self { slots })
    }

    /// Returns the slots in line order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Converts the slots to constraints tagged with their positions.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::NonPositivePeriod`] if a slot has a period
    /// that is not positive.
    pub fn constraint_set(&self) -> Result<ConstraintSet, CrtError> {
        self.slots
            .iter()
            .map(|slot| {
                let congruence =
                    Congruence::from_phase(slot.period.clone(), &Integer::from(slot.position))?;
                Ok::<_, CrtError>(Constraint::new(slot.position, congruence))
            })
            .collect()
    }

    /// Earliest `t` at which every bus leaves at its slot's offset.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Solver`] if the schedule is empty or can
    /// never line up.
    pub fn lowest_time(&self) -> Result<Integer, ScheduleError> {
        self.lowest_time_with(&SolverConfig::default())
    }

    /// Like [`Schedule::lowest_time`], with explicit solver configuration.
    ///
    /// # Errors
    ///
    /// See [`Schedule::lowest_time`].
    pub fn lowest_time_with(&self, config: &SolverConfig) -> Result<Integer, ScheduleError> {
        Ok(self.constraint_set()?.solve_with(config)?)
    }
}
