//! Buses and the earliest-departure question.

use residua_integers::Integer;

use crate::error::ScheduleError;
use crate::format::ScheduleFormat;

/// A bus departing from time 0 every `id` minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bus {
    id: Integer,
}

impl Bus {
    /// Creates a bus; `id` must already be checked to be positive.
    #[must_use]
    pub(crate) fn new(id: Integer) -> Self {
        Self { id }
    }

    /// Returns the bus id, which is also its period.
    #[must_use]
    pub fn id(&self) -> &Integer {
        &self.id
    }

    /// Minutes from `after` until this bus next departs.
    ///
    /// A bus departing exactly at `after` has a wait of zero.
    #[must_use]
    pub fn departs_in(&self, after: &Integer) -> Integer {
        (-after).mod_floor(&self.id)
    }
}

/// The next bus to catch and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    /// The bus to take.
    pub bus: Bus,
    /// Minutes until it departs.
    pub wait: Integer,
}

impl Departure {
    /// Bus id multiplied by the wait.
    #[must_use]
    pub fn checksum(&self) -> Integer {
        self.bus.id() * &self.wait
    }
}

/// Every in-service bus listed on a bus line, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusList {
    buses: Vec<Bus>,
}

impl BusList {
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
        let buses = format
            .entries(line)
            .map(|entry| entry.map(|(_, id)| Bus::new(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { buses })
    }

    /// Returns the buses in line order.
    #[must_use]
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Finds the bus with the shortest wait after `after`.
    ///
    /// Ties go to the bus listed first. Returns `None` for an empty list.
    #[must_use]
    pub fn fastest_after(&self, after: &Integer) -> Option<Departure> {
        self.buses
            .iter()
            .map(|bus| Departure {
                bus: bus.clone(),
                wait: bus.departs_in(after),
            })
            .min_by(|a, b| a.wait.cmp(&b.wait))
    }
}
