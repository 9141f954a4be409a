//! The two-line notes: an earliest departure time and a bus line.

use residua_integers::Integer;

use crate::bus::BusList;
use crate::error::ScheduleError;
use crate::format::ScheduleFormat;
use crate::schedule::Schedule;

/// Parsed notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notes {
    /// Earliest time we could depart.
    pub earliest_departure: Integer,
    /// In-service buses.
    pub buses: BusList,
    /// The same line read as a schedule, keeping slot positions.
    pub schedule: Schedule,
}

impl Notes {
    /// Parses notes with the default format.
    ///
    /// # Errors
    ///
    /// See [`Notes::parse_with`].
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        Self::parse_with(text, &ScheduleFormat::default())
    }

    /// Parses notes with an explicit bus line format.
    ///
    /// Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidNotes`] unless there are exactly two
    /// lines, [`ScheduleError::InvalidDeparture`] if the first is not a
    /// non-negative integer, and [`ScheduleError::MalformedConstraint`] for a
    /// bad bus entry.
    pub fn parse_with(text: &str, format: &ScheduleFormat) -> Result<Self, ScheduleError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let [departure, bus_line] = lines[..] else {
            return Err(ScheduleError::InvalidNotes { lines: lines.len() });
        };

        let earliest_departure = departure
            .parse::<Integer>()
            .ok()
            .filter(|time| !time.is_negative())
            .ok_or_else(|| ScheduleError::InvalidDeparture {
                token: departure.to_string(),
            })?;

        Ok(Self {
            earliest_departure,
            buses: BusList::parse_with(bus_line, format)?,
            schedule: Schedule::parse_with(bus_line, format)?,
        })
    }
}
