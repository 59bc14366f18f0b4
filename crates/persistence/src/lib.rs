//! # topf-persistence
//!
//! Topological persistence (prominence) of the local maxima of a
//! one-dimensional function.
//!
//! A flood level descends from the global maximum to the global minimum.
//! Every local maximum starts a peak; when the flood level reaches a saddle
//! between two peaks, the lower one merges into the taller one and its
//! persistence is the drop from its summit to the saddle. The global
//! maximum never merges and receives the full value range.
//!
//! ## Pipeline
//!
//! ```text
//! compute_with_config()
//!   ├─ validate config and values
//!   ├─ sweep_order()             value desc, index asc   (engine.rs)
//!   ├─ sweep()                   union-find merges       (engine.rs, union_find.rs)
//!   ├─ PersistenceDiagram::new() optional                (diagram.rs)
//!   └─ keep_n_peaks()            optional                (filter.rs)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use topf_persistence::{PersistenceConfig, compute, compute_with_config};
//!
//! let values = [3.0, 1.0, 6.0, 5.0, 8.0, 2.0, 7.0, 4.0];
//! assert_eq!(
//!     compute(&values).unwrap(),
//!     vec![2.0, 0.0, 1.0, 0.0, 7.0, 0.0, 5.0, 0.0]
//! );
//!
//! let config = PersistenceConfig::new().with_diagram(true).with_n_peaks(2);
//! let result = compute_with_config(&values, &config).unwrap();
//! assert_eq!(result.peak_indices(), vec![4, 6]);
//! assert_eq!(result.diagram().unwrap().total_persistence(1.0).unwrap(), 15.0);
//! ```
//!
//! ## Conventions
//!
//! | Situation | Behaviour |
//! |-----------|-----------|
//! | Equal values | earlier index is visited first |
//! | Plateau | left-most sample is the birth point |
//! | Equal peaks merging | the right-hand peak is retired |
//! | Global maximum | `max - min`, or `f64::INFINITY` with [`GlobalPeak::Infinite`] |
//! | Single sample | `[0.0]` |
//! | `max - min` overflows `f64` | rejected with [`PersistenceError::RangeOverflow`] |

mod config;
mod diagram;
mod engine;
mod error;
mod filter;
mod result;
mod union_find;

pub use config::{GlobalPeak, PersistenceConfig};
pub use diagram::{PersistenceDiagram, PersistencePair};
pub use engine::{compute, compute_with_config, transform_points};
pub use error::PersistenceError;
pub use filter::keep_n_peaks;
pub use result::PersistenceResult;
