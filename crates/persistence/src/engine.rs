//! Persistence computation entry points and the descending sweep.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::{GlobalPeak, PersistenceConfig};
use crate::diagram::{PersistenceDiagram, PersistencePair};
use crate::error::PersistenceError;
use crate::filter::keep_n_peaks;
use crate::result::PersistenceResult;
use crate::union_find::UnionFind;

/// Outcome of a sweep over validated values.
#[derive(Debug)]
struct Sweep {
    /// One pair per peak that merged into a taller one.
    retired: Vec<PersistencePair>,
    /// Index of the global maximum (left-most among equal maxima).
    global_max: usize,
    /// Index of the global minimum (right-most among equal minima).
    global_min: usize,
}

/// Computes the persistence of every sample with the default configuration.
///
/// Position `i` of the output holds the persistence of the peak born at `i`,
/// or `0.0` if `i` is not a local maximum. The global maximum receives the
/// full value range `max - min`; a single-sample input yields `[0.0]`.
///
/// # Errors
///
/// Returns [`PersistenceError::EmptyInput`] for an empty slice,
/// [`PersistenceError::NonFiniteValue`] if any value is NaN or infinite, and
/// [`PersistenceError::RangeOverflow`] if `max - min` is not representable.
///
/// # Example
///
/// ```
/// use topf_persistence::compute;
///
/// let persistence = compute(&[0.0, 3.0, 1.0, 5.0, 0.0]).unwrap();
/// assert_eq!(persistence, vec![0.0, 2.0, 0.0, 5.0, 0.0]);
/// ```
pub fn compute(values: &[f64]) -> Result<Vec<f64>, PersistenceError> {
    compute_with_config(values, &PersistenceConfig::default())
        .map(PersistenceResult::into_persistence)
}

/// Computes the persistence of every sample.
///
/// Applies the configured sentinel to the global maximum, builds the
/// persistence diagram if requested, and finally applies top-n peak
/// selection. The diagram always reflects the unfiltered sweep.
///
/// # Errors
///
/// Returns [`PersistenceError::InvalidPeakCount`] for a configuration that
/// keeps zero peaks, plus the input errors of [`compute`].
#[tracing::instrument(skip_all, fields(n = values.len()))]
pub fn compute_with_config(
    values: &[f64],
    config: &PersistenceConfig,
) -> Result<PersistenceResult, PersistenceError> {
    config.validate()?;
    validate_values(values)?;

    let Sweep {
        retired,
        global_max,
        global_min,
    } = sweep(values);

    let n = values.len();
    let mut persistence = vec![0.0; n];
    for pair in &retired {
        persistence[pair.birth_index] = pair.persistence();
    }

    // A single sample has no range to drop through.
    if n > 1 {
        persistence[global_max] = match config.global_peak() {
            GlobalPeak::Range => values[global_max] - values[global_min],
            GlobalPeak::Infinite => f64::INFINITY,
        };
    }

    debug!(
        n_peaks = peak_count(&retired, values[global_max] - values[global_min]),
        global_max,
        global_min,
        "sweep complete"
    );

    let diagram = config.diagram().then(|| {
        let mut pairs = retired;
        pairs.push(PersistencePair {
            birth_index: global_max,
            birth_value: values[global_max],
            death_index: global_min,
            death_value: values[global_min],
        });
        PersistenceDiagram::new(pairs)
    });

    if let Some(n_peaks) = config.n_peaks() {
        persistence = keep_n_peaks(&persistence, n_peaks)?;
    }

    Ok(PersistenceResult::new(persistence, diagram))
}

/// Transforms `[x, y]` points into `[x, persistence(y)]` points.
///
/// The `x` coordinates are passed through unchanged; only the order of the
/// points and their `y` values matter to the computation.
///
/// # Example
///
/// ```
/// use topf_persistence::{PersistenceConfig, transform_points};
///
/// let points = [[0.0, 1.0], [0.5, 2.0], [1.0, 3.0]];
/// let out = transform_points(&points, &PersistenceConfig::default()).unwrap();
/// assert_eq!(out, vec![[0.0, 0.0], [0.5, 0.0], [1.0, 2.0]]);
/// ```
pub fn transform_points(
    points: &[[f64; 2]],
    config: &PersistenceConfig,
) -> Result<Vec<[f64; 2]>, PersistenceError> {
    let values: Vec<f64> = points.iter().map(|p| p[1]).collect();
    let result = compute_with_config(&values, config)?;
    Ok(points
        .iter()
        .zip(result.persistence())
        .map(|(p, &pers)| [p[0], pers])
        .collect())
}

fn validate_values(values: &[f64]) -> Result<(), PersistenceError> {
    if values.is_empty() {
        return Err(PersistenceError::EmptyInput);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PersistenceError::NonFiniteValue { index, value });
    }
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !(max - min).is_finite() {
        return Err(PersistenceError::RangeOverflow { max, min });
    }
    Ok(())
}

/// Number of peaks with non-zero persistence, the global one included.
///
/// Plateau shoulders retire at their own level and are not counted.
fn peak_count(retired: &[PersistencePair], range: f64) -> usize {
    let merged = retired.iter().filter(|p| p.persistence() > 0.0).count();
    merged + usize::from(range > 0.0)
}

/// Returns the sweep order: value descending, ties by ascending index.
///
/// The index tie-break is a convention, not a consequence of the theory: it
/// makes the left-most sample of a plateau its birth point.
fn sweep_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

/// Whether the peak born at `a` survives a merge with the peak born at `b`.
fn outranks(values: &[f64], a: usize, b: usize) -> bool {
    values[a] > values[b] || (values[a] == values[b] && a < b)
}

/// Lowers the flood level one sample at a time, merging peaks at saddles.
///
/// Expects non-empty, finite values. Component representatives are always
/// birth indices: a new sample is attached below its neighbour's root, and a
/// retired peak's root is attached below the survivor's root.
fn sweep(values: &[f64]) -> Sweep {
    let n = values.len();
    let order = sweep_order(values);
    let mut uf = UnionFind::new(n);
    let mut processed = vec![false; n];
    let mut retired = Vec::new();

    for &i in &order {
        let v = values[i];
        let left = (i > 0 && processed[i - 1]).then(|| uf.find(i - 1));
        let right = (i + 1 < n && processed[i + 1]).then(|| uf.find(i + 1));

        match (left, right) {
            // New local maximum: `i` is already its own root.
            (None, None) => {}
            (Some(root), None) | (None, Some(root)) => uf.merge(i, root),
            (Some(l), Some(r)) if l == r => uf.merge(i, l),
            (Some(l), Some(r)) => {
                let (young, old) = if outranks(values, l, r) { (r, l) } else { (l, r) };
                retired.push(PersistencePair {
                    birth_index: young,
                    birth_value: values[young],
                    death_index: i,
                    death_value: v,
                });
                uf.merge(young, old);
                uf.merge(i, old);
            }
        }
        processed[i] = true;
    }

    let global_max = order[0];
    let global_min = order[n - 1];
    debug_assert_eq!(uf.find(global_min), global_max, "sweep left more than one component");

    Sweep {
        retired,
        global_max,
        global_min,
    }
}
