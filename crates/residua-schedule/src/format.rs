//! Tokenizing of bus lines.

use residua_integers::Integer;

use crate::error::ScheduleError;

/// How a bus line is written.
#[derive(Clone, Debug)]
pub struct ScheduleFormat {
    /// Separator between entries.
    pub separator: char,
    /// Entry marking a slot with no bus.
    pub wildcard: String,
}

impl Default for ScheduleFormat {
    fn default() -> Self {
        Self {
            separator: ',',
            wildcard: "x".to_string(),
        }
    }
}

impl ScheduleFormat {
    /// Yields `(position, id)` for every non-wildcard entry of `line`.
    ///
    /// Wildcards are skipped, so positions may have gaps.
    pub(crate) fn entries<'a>(
        &'a self,
        line: &'a str,
    ) -> impl Iterator<Item = Result<(usize, Integer), ScheduleError>> + 'a {
        line.split(self.separator)
            .map(str::trim)
            .enumerate()
            .filter(move |(_, token)| *token != self.wildcard)
            .map(|(position, token)| parse_id(position, token).map(|id| (position, id)))
    }
}

fn parse_id(position: usize, token: &str) -> Result<Integer, ScheduleError> {
    let malformed = |reason| ScheduleError::MalformedConstraint {
        position,
        token: token.to_string(),
        reason,
    };

    let id: Integer = token.parse().map_err(|_| malformed("not an integer"))?;
    if !id.is_positive() {
        return Err(malformed("bus id must be positive"));
    }
    Ok(id)
}
