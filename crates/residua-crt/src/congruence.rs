//! Residue classes and the pairwise CRT merge.
//!
//! A [`Congruence`] is the set `{ t : t ≡ offset (mod period) }`. Merging
//! two congruences yields the congruence describing their intersection,
//! or [`CrtError::NoIntersection`] when the classes are disjoint. Periods
//! do not need to be coprime.

use std::fmt;

use residua_integers::{ExtendedGcd, Integer};
use tracing::trace;

use crate::error::CrtError;

/// A residue class `t ≡ offset (mod period)` with `period > 0`.
///
/// The offset is stored as given and only reduced when read through
/// [`Congruence::residue`]. Derived equality is structural; use
/// [`Congruence::is_equivalent`] to compare residue classes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Congruence {
    period: Integer,
    offset: Integer,
}

impl Congruence {
    /// Creates the congruence `t ≡ offset (mod period)`.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::NonPositivePeriod`] if `period <= 0`.
    pub fn new(period: Integer, offset: Integer) -> Result<Self, CrtError> {
        if !period.is_positive() {
            return Err(CrtError::NonPositivePeriod { period });
        }
        Ok(Self { period, offset })
    }

    /// Creates a congruence from machine integers.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::NonPositivePeriod`] if `period <= 0`.
    pub fn from_i64(period: i64, offset: i64) -> Result<Self, CrtError> {
        Self::new(Integer::new(period), Integer::new(offset))
    }

    /// Creates the congruence for an event recurring every `period` units
    /// that must happen `phase` units after `t`.
    ///
    /// `t + phase ≡ 0 (mod period)`, so the stored offset is
    /// `-phase mod period`.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::NonPositivePeriod`] if `period <= 0`.
    pub fn from_phase(period: Integer, phase: &Integer) -> Result<Self, CrtError> {
        if !period.is_positive() {
            return Err(CrtError::NonPositivePeriod { period });
        }
        let offset = (-phase).mod_floor(&period);
        Ok(Self { period, offset })
    }

    /// Returns the period (modulus).
    #[must_use]
    pub fn period(&self) -> &Integer {
        &self.period
    }

    /// Returns the offset as stored, which may lie outside `[0, period)`.
    #[must_use]
    pub fn offset(&self) -> &Integer {
        &self.offset
    }

    /// Returns the offset reduced into `[0, period)`.
    #[must_use]
    pub fn residue(&self) -> Integer {
        self.offset.mod_floor(&self.period)
    }

    /// Returns the smallest non-negative member of the class.
    #[must_use]
    pub fn smallest_solution(&self) -> Integer {
        self.residue()
    }

    /// Returns true if `t` belongs to this residue class.
    #[must_use]
    pub fn contains(&self, t: &Integer) -> bool {
        (t - &self.offset).is_multiple_of(&self.period)
    }

    /// Returns true if both congruences describe the same set of integers.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.period == other.period && (&self.offset - &other.offset).is_multiple_of(&self.period)
    }

    /// Intersects two residue classes (generalized CRT step).
    ///
    /// With `g = gcd(p, q) = p*x + q*y`, a common member exists iff
    /// `g | (a - b)`. Writing `t = a - m*p` and solving `m*p ≡ a - b
    /// (mod q)` gives `m = x * (a - b) / g`, and the result has period
    /// `lcm(p, q)`.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::NoIntersection`] if the classes are disjoint.
    pub fn merge(&self, other: &Self) -> Result<Self, CrtError> {
        let ExtendedGcd { gcd, x, .. } = self.period.extended_gcd(&other.period);
        let delta = &self.offset - &other.offset;

        if !delta.is_multiple_of(&gcd) {
            return Err(CrtError::NoIntersection {
                left: self.clone(),
                right: other.clone(),
                origin: None,
            });
        }

        let period = &(&self.period / &gcd) * &other.period;
        let m = &(&delta / &gcd) * &x;
        let offset = (&self.offset - &(&m * &self.period)).mod_floor(&period);

        trace!(target: "residua::crt", %period, %offset, "merged congruences");

        Ok(Self { period, offset })
    }
}

impl fmt::Display for Congruence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t ≡ {} (mod {})", self.residue(), self.period)
    }
}
