//! Transform command: replace every sample by its persistence value.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use topf_persistence::{PersistenceConfig, compute_with_config};

use crate::cli::{CommonArgs, TransformArgs};
use crate::config::TopfConfig;
use crate::convert;
use crate::input::{Samples, read_samples};
use crate::output::{open_output, write_diagram, write_transformed};

/// Loads the TOML config named on the command line, or defaults.
pub fn load_config(common: &CommonArgs) -> Result<TopfConfig> {
    match &common.config {
        Some(path) => TopfConfig::load(path),
        None => Ok(TopfConfig::default()),
    }
}

/// Reads the input samples and builds the library configuration. CLI flags
/// override config values.
pub fn prepare(
    common: &CommonArgs,
    config: &TopfConfig,
    diagram: bool,
) -> Result<(Samples, PersistenceConfig)> {
    let input = common
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| anyhow::anyhow!("no input path: use --input or set [io].input in config"))?;
    let samples = read_samples(input)?;

    let persistence_cfg =
        convert::build_persistence_config(&config.persistence, common, diagram)?;
    Ok((samples, persistence_cfg))
}

/// Run the transform pipeline.
pub fn run(args: TransformArgs) -> Result<()> {
    let _cmd = info_span!("transform").entered();

    // 1. Load config and samples; a diagram path on either side enables it
    let config = load_config(&args.common)?;
    let diagram_path = args.diagram.clone().or_else(|| config.io.diagram.clone());
    let (samples, persistence_cfg) = prepare(&args.common, &config, diagram_path.is_some())?;

    // 2. Compute persistence
    let result = compute_with_config(&samples.y, &persistence_cfg)
        .context("persistence computation failed")?;
    info!(n_peaks = result.peak_indices().len(), "persistence computed");

    // 3. Write transformed function
    let output = args.output.or(config.io.output);
    let mut out = open_output(output.as_deref())?;
    write_transformed(&mut out, &samples.x, result.persistence())
        .context("failed to write transformed function")?;

    // 4. Write diagram
    if let (Some(path), Some(diagram)) = (diagram_path, result.diagram()) {
        write_diagram(&path, diagram)?;
        info!(path = %path.display(), n_pairs = diagram.len(), "diagram written");
    }

    Ok(())
}
