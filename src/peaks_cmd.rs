//! Peaks command: list peaks ranked by persistence.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use topf_persistence::compute_with_config;

use crate::cli::PeaksArgs;
use crate::config::TopfConfig;
use crate::output::{open_output, rank_peaks, write_peaks};
use crate::transform_cmd::{load_config, prepare};

/// Run the peak ranking pipeline.
pub fn run(args: PeaksArgs) -> Result<()> {
    let _cmd = info_span!("peaks").entered();

    let config = load_config(&args.common)?;
    if let Some(path) = unused_diagram_path(&config) {
        debug!(path = %path.display(), "[io].diagram is only written by `transform`; ignoring");
    }
    let (samples, persistence_cfg) = prepare(&args.common, &config, false)?;
    let result = compute_with_config(&samples.y, &persistence_cfg)
        .context("persistence computation failed")?;

    let rows = rank_peaks(&samples.x, &samples.y, result.persistence());
    info!(n_peaks = rows.len(), "peaks ranked");

    let output = args.output.or(config.io.output);
    let mut out = open_output(output.as_deref())?;
    write_peaks(&mut out, &rows).context("failed to write peak table")?;
    Ok(())
}

/// The `[io].diagram` path of a shared config, which `peaks` never writes.
fn unused_diagram_path(config: &TopfConfig) -> Option<&Path> {
    config.io.diagram.as_deref()
}
