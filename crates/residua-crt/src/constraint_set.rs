//! Ordered systems of congruences.
//!
//! A [`ConstraintSet`] folds its congruences through
//! [`Congruence::merge`] and reports the smallest non-negative integer
//! that satisfies all of them. Large sets can be reduced as a parallel
//! tree with rayon, which is valid because merging is associative.

use rayon::prelude::*;
use residua_integers::Integer;
use tracing::debug;

use crate::congruence::Congruence;
use crate::error::CrtError;

/// Configuration for solving constraint sets.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Minimum number of constraints to enable the parallel tree reduction.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
        }
    }
}

/// A congruence tagged with its position in the original input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    /// Position in the input, used for diagnostics only.
    pub origin: usize,
    /// The residue class this constraint imposes.
    pub congruence: Congruence,
}

impl Constraint {
    /// Creates a new constraint.
    #[must_use]
    pub fn new(origin: usize, congruence: Congruence) -> Self {
        Self { origin, congruence }
    }
}

/// An ordered sequence of constraints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Creates a constraint set from tagged constraints, keeping their order.
    #[must_use]
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    /// Creates a constraint set whose origins are the congruences' indices.
    pub fn from_congruences<I>(congruences: I) -> Self
    where
        I: IntoIterator<Item = Congruence>,
    {
        congruences
            .into_iter()
            .enumerate()
            .map(|(origin, congruence)| Constraint::new(origin, congruence))
            .collect()
    }

    /// Returns the number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if there are no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns the constraints in input order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Iterates over the constraints in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// Returns the smallest non-negative integer satisfying every constraint.
    ///
    /// # Errors
    ///
    /// Returns [`CrtError::EmptyConstraintSet`] for an empty set and
    /// [`CrtError::NoIntersection`] when the constraints are incompatible.
    pub fn solve(&self) -> Result<Integer, CrtError> {
        self.solve_with(&SolverConfig::default())
    }

    /// Like [`ConstraintSet::solve`], with explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`ConstraintSet::solve`].
    pub fn solve_with(&self, config: &SolverConfig) -> Result<Integer, CrtError> {
        self.combine_with(config)
            .map(|combined| combined.smallest_solution())
    }

    /// Returns the single congruence equivalent to the whole set.
    ///
    /// # Errors
    ///
    /// See [`ConstraintSet::solve`].
    pub fn combine(&self) -> Result<Congruence, CrtError> {
        self.combine_with(&SolverConfig::default())
    }

    /// Like [`ConstraintSet::combine`], with explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`ConstraintSet::solve`].
    pub fn combine_with(&self, config: &SolverConfig) -> Result<Congruence, CrtError> {
        let parallel = self.len() >= config.parallel_threshold;
        debug!(
            target: "residua::crt",
            constraints = self.len(),
            parallel,
            "combining constraint set"
        );

        let combined = if parallel {
            fold_parallel(&self.constraints)
        } else {
            fold_sequential(&self.constraints)
        }?;

        debug!(target: "residua::crt", period = %combined.period(), "constraint set combined");
        Ok(combined)
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Left-to-right fold, stopping at the first incompatible constraint.
fn fold_sequential(constraints: &[Constraint]) -> Result<Congruence, CrtError> {
    let (first, rest) = constraints
        .split_first()
        .ok_or(CrtError::EmptyConstraintSet)?;

    rest.iter()
        .try_fold(first.congruence.clone(), |acc, constraint| {
            acc.merge(&constraint.congruence)
                .map_err(|err| err.at_origin(constraint.origin))
        })
}

/// A merged run of constraints, remembering where the run starts.
struct Partial {
    origin: usize,
    congruence: Congruence,
}

/// Order-preserving tree reduction.
///
/// On failure the reported origin is the first constraint of the right-hand
/// run, which need not match the sequential fold's choice.
fn fold_parallel(constraints: &[Constraint]) -> Result<Congruence, CrtError> {
    constraints
        .par_iter()
        .map(|constraint| {
            Ok::<_, CrtError>(Partial {
                origin: constraint.origin,
                congruence: constraint.congruence.clone(),
            })
        })
        .try_reduce_with(|left, right| {
            left.congruence
                .merge(&right.congruence)
                .map(|congruence| Partial {
                    origin: left.origin,
                    congruence,
                })
                .map_err(|err| err.at_origin(right.origin))
        })
        .unwrap_or(Err(CrtError::EmptyConstraintSet))
        .map(|partial| partial.congruence)
}
