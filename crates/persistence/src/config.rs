//! Configuration for persistence computations.

use crate::error::PersistenceError;

/// Persistence assigned to the global maximum, which never merges into a
/// taller peak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlobalPeak {
    /// `global_max - global_min`, the full value range of the input.
    #[default]
    Range,
    /// `f64::INFINITY`, an explicit unbounded marker.
    Infinite,
}

/// Configuration for a persistence computation.
///
/// # Example
///
/// ```
/// use topf_persistence::{GlobalPeak, PersistenceConfig};
///
/// let config = PersistenceConfig::new()
///     .with_global_peak(GlobalPeak::Infinite)
///     .with_n_peaks(3)
///     .with_diagram(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceConfig {
    /// Sentinel convention for the global maximum.
    global_peak: GlobalPeak,
    /// Keep only the `n` most persistent peaks, if set.
    n_peaks: Option<usize>,
    /// Whether to also build the persistence diagram.
    diagram: bool,
}

impl PersistenceConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: range sentinel, no peak selection, no diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sentinel convention for the global maximum.
    pub fn with_global_peak(mut self, global_peak: GlobalPeak) -> Self {
        self.global_peak = global_peak;
        self
    }

    /// Keeps only the `n` most persistent peaks.
    pub fn with_n_peaks(mut self, n: usize) -> Self {
        self.n_peaks = Some(n);
        self
    }

    /// Enables or disables persistence diagram construction.
    pub fn with_diagram(mut self, diagram: bool) -> Self {
        self.diagram = diagram;
        self
    }

    /// Returns the sentinel convention for the global maximum.
    pub fn global_peak(&self) -> GlobalPeak {
        self.global_peak
    }

    /// Returns the number of peaks to keep, if peak selection is enabled.
    pub fn n_peaks(&self) -> Option<usize> {
        self.n_peaks
    }

    /// Returns whether the persistence diagram is built.
    pub fn diagram(&self) -> bool {
        self.diagram
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `n_peaks` is `Some(0)`.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if self.n_peaks == Some(0) {
            return Err(PersistenceError::InvalidPeakCount { n: 0 });
        }
        Ok(())
    }
}
