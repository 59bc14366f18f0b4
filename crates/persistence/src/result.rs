//! Output type for persistence computations.

use crate::diagram::PersistenceDiagram;

/// Result of a persistence computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistenceResult {
    /// Persistence per input position (zero for non-peaks).
    persistence: Vec<f64>,
    /// Birth/death pairs, if requested.
    diagram: Option<PersistenceDiagram>,
}

impl PersistenceResult {
    /// Creates a new `PersistenceResult`.
    pub(crate) fn new(persistence: Vec<f64>, diagram: Option<PersistenceDiagram>) -> Self {
        Self {
            persistence,
            diagram,
        }
    }

    /// Returns the persistence value of every input position.
    pub fn persistence(&self) -> &[f64] {
        &self.persistence
    }

    /// Returns the persistence diagram, if it was requested.
    pub fn diagram(&self) -> Option<&PersistenceDiagram> {
        self.diagram.as_ref()
    }

    /// Returns the indices of all positions with non-zero persistence.
    pub fn peak_indices(&self) -> Vec<usize> {
        self.persistence
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Consumes the result, returning the persistence values.
    pub fn into_persistence(self) -> Vec<f64> {
        self.persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let result = PersistenceResult::new(vec![0.0, 2.0, 0.0, 5.0], None);
        assert_eq!(result.persistence(), &[0.0, 2.0, 0.0, 5.0]);
        assert!(result.diagram().is_none());
        assert_eq!(result.peak_indices(), vec![1, 3]);
        assert_eq!(result.into_persistence(), vec![0.0, 2.0, 0.0, 5.0]);
    }
}
