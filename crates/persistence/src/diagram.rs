//! Persistence diagrams: the birth/death pairs produced by a sweep.

use serde::Serialize;

use crate::error::PersistenceError;

/// One peak of the input: where it was born and where it merged into a
/// taller peak.
///
/// For the global maximum the death point is the global minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersistencePair {
    /// Index of the local maximum that created the peak.
    pub birth_index: usize,
    /// Value at the birth index.
    pub birth_value: f64,
    /// Index of the saddle at which the peak was retired.
    pub death_index: usize,
    /// Value at the death index.
    pub death_value: f64,
}

impl PersistencePair {
    /// Returns `birth_value - death_value`.
    pub fn persistence(&self) -> f64 {
        self.birth_value - self.death_value
    }
}

/// Persistence diagram of a one-dimensional function.
///
/// Holds one pair per peak with non-zero persistence, ordered by birth
/// index. Pairs on the diagonal (plateau shoulders that die at their own
/// level) are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PersistenceDiagram {
    pairs: Vec<PersistencePair>,
}

impl PersistenceDiagram {
    /// Builds a diagram, dropping zero-persistence pairs and sorting the
    /// remainder by birth index.
    pub(crate) fn new(mut pairs: Vec<PersistencePair>) -> Self {
        pairs.retain(|p| p.persistence() > 0.0);
        pairs.sort_by_key(|p| p.birth_index);
        Self { pairs }
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the diagram has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs, ordered by birth index.
    pub fn pairs(&self) -> &[PersistencePair] {
        &self.pairs
    }

    /// Iterates over the pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair> {
        self.pairs.iter()
    }

    /// Total persistence with exponent `p`: `(Σ persistenceᵖ)^(1/p)`.
    ///
    /// `p = 1` gives the plain sum of all persistence values.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::InvalidExponent`] if `p` is not finite or
    /// not positive.
    pub fn total_persistence(&self, p: f64) -> Result<f64, PersistenceError> {
        if !p.is_finite() || p <= 0.0 {
            return Err(PersistenceError::InvalidExponent { p });
        }
        let sum: f64 = self.pairs.iter().map(|pair| pair.persistence().powf(p)).sum();
        Ok(sum.powf(1.0 / p))
    }
}

impl<'a> IntoIterator for &'a PersistenceDiagram {
    type Item = &'a PersistencePair;
    type IntoIter = std::slice::Iter<'a, PersistencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
