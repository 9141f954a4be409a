//! Errors produced while building and solving congruence systems.

use residua_integers::Integer;
use thiserror::Error;

use crate::congruence::Congruence;

/// Errors that can occur while combining congruences.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CrtError {
    /// A congruence was constructed with a zero or negative period.
    #[error("period must be positive, got {period}")]
    NonPositivePeriod {
        /// The rejected period.
        period: Integer,
    },

    /// No integer satisfies both congruences.
    ///
    /// This describes the input, not a solver fault: the two residue
    /// classes are disjoint.
    #[error("no integer satisfies both {left} and {right}{}", origin_suffix(.origin))]
    NoIntersection {
        /// The accumulated (or left-hand) congruence.
        left: Congruence,
        /// The congruence that could not be merged into `left`.
        right: Congruence,
        /// Input position of `right`, when merged as part of a constraint set.
        origin: Option<usize>,
    },

    /// A constraint set with no constraints has no meaningful solution.
    #[error("cannot solve an empty constraint set")]
    EmptyConstraintSet,
}

impl CrtError {
    /// Returns the input position of the constraint that failed to merge.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        match self {
            Self::NoIntersection { origin, .. } => *origin,
            _ => None,
        }
    }

    /// Returns true for the incompatible-constraints outcome.
    #[must_use]
    pub fn is_no_intersection(&self) -> bool {
        matches!(self, Self::NoIntersection { .. })
    }

    /// Tags a `NoIntersection` with the position of the failing constraint.
    pub(crate) fn at_origin(self, position: usize) -> Self {
        match self {
            Self::NoIntersection { left, right, .. } => Self::NoIntersection {
                left,
                right,
                origin: Some(position),
            },
            other => other,
        }
    }
}

fn origin_suffix(origin: &Option<usize>) -> String {
    origin.map_or_else(String::new, |position| format!(" (constraint {position})"))
}
