//! Writing transformed functions, peak tables and diagrams.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use topf_persistence::PersistenceDiagram;

/// Opens `path` for writing, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("failed to create output file: {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Writes tab-separated `x persistence` rows.
pub fn write_transformed(out: &mut impl Write, x: &[f64], persistence: &[f64]) -> io::Result<()> {
    for (xi, p) in x.iter().zip(persistence) {
        writeln!(out, "{xi}\t{p}")?;
    }
    out.flush()
}

/// One row of the ranked peak table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakRow {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub persistence: f64,
}

/// Collects peaks with non-zero persistence, most persistent first.
///
/// Equal persistence keeps the input order.
pub fn rank_peaks(x: &[f64], y: &[f64], persistence: &[f64]) -> Vec<PeakRow> {
    let mut rows: Vec<PeakRow> = persistence
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > 0.0)
        .map(|(index, &persistence)| PeakRow {
            index,
            x: x[index],
            y: y[index],
            persistence,
        })
        .collect();
    rows.sort_by(|a, b| b.persistence.total_cmp(&a.persistence));
    rows
}

/// Writes the ranked peak table with a header row.
pub fn write_peaks(out: &mut impl Write, rows: &[PeakRow]) -> io::Result<()> {
    writeln!(out, "rank\tindex\tx\ty\tpersistence")?;
    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            rank + 1,
            row.index,
            row.x,
            row.y,
            row.persistence
        )?;
    }
    out.flush()
}

/// Writes the persistence diagram as pretty-printed JSON.
pub fn write_diagram(path: &Path, diagram: &PersistenceDiagram) -> Result<()> {
    let json = serde_json::to_string_pretty(diagram).context("failed to serialise diagram")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write diagram: {}", path.display()))
}
