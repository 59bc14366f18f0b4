//! Top-n peak selection on a computed persistence sequence.

use tracing::warn;

use crate::error::PersistenceError;

/// Keeps only the `n` most persistent peaks.
///
/// Every value strictly below the `n`-th largest persistence is set to zero.
/// If several peaks tie with the `n`-th largest value, all of them are kept
/// and a warning is logged, so the result may hold more than `n` peaks. If
/// `n` exceeds the number of samples, the input is returned unchanged.
///
/// # Errors
///
/// Returns [`PersistenceError::InvalidPeakCount`] if `n == 0`.
///
/// # Example
///
/// ```
/// use topf_persistence::keep_n_peaks;
///
/// let kept = keep_n_peaks(&[0.0, 2.0, 0.0, 5.0, 0.0, 1.0], 2).unwrap();
/// assert_eq!(kept, vec![0.0, 2.0, 0.0, 5.0, 0.0, 0.0]);
/// ```
pub fn keep_n_peaks(persistence: &[f64], n: usize) -> Result<Vec<f64>, PersistenceError> {
    if n == 0 {
        return Err(PersistenceError::InvalidPeakCount { n });
    }

    let mut out = persistence.to_vec();
    if n >= persistence.len() {
        if n > persistence.len() {
            warn!(
                requested = n,
                available = persistence.len(),
                "fewer samples than requested peaks; returning all of them"
            );
        }
        return Ok(out);
    }

    let mut sorted = persistence.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let threshold = sorted[n - 1];

    if sorted[n] == threshold && threshold > 0.0 {
        warn!(
            requested = n,
            threshold, "duplicate persistence values at the cut-off; keeping more peaks"
        );
    }

    for v in out.iter_mut() {
        if *v < threshold {
            *v = 0.0;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_highest() {
        let kept = keep_n_peaks(&[0.0, 3.0, 0.0, 1.0, 0.0, 7.0], 1).unwrap();
        assert_eq!(kept, vec![0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_ties_keep_more() {
        let kept = keep_n_peaks(&[2.0, 0.0, 2.0, 0.0, 5.0], 2).unwrap();
        assert_eq!(kept, vec![2.0, 0.0, 2.0, 0.0, 5.0]);
    }

    #[test]
    fn test_more_than_available() {
        let input = [0.0, 1.0, 0.0];
        assert_eq!(keep_n_peaks(&input, 10).unwrap(), input.to_vec());
        assert_eq!(keep_n_peaks(&input, 3).unwrap(), input.to_vec());
    }

    #[test]
    fn test_more_than_peaks_keeps_all_peaks() {
        // Only two peaks; asking for three cuts at zero and changes nothing.
        let input = [0.0, 4.0, 0.0, 2.0, 0.0];
        assert_eq!(keep_n_peaks(&input, 3).unwrap(), input.to_vec());
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(
            keep_n_peaks(&[1.0], 0),
            Err(PersistenceError::InvalidPeakCount { n: 0 })
        ));
    }

    #[test]
    fn test_infinite_sentinel_is_kept() {
        let kept = keep_n_peaks(&[0.0, f64::INFINITY, 0.0, 2.0], 1).unwrap();
        assert_eq!(kept, vec![0.0, f64::INFINITY, 0.0, 0.0]);
    }
}
