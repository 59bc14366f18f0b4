//! Reading samples from delimited text files.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

/// Samples loaded from a text file: domain coordinates and values.
///
/// Single-column files get `x = row index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.y.len()
    }
}

/// Reads samples from `path`.
pub fn read_samples(path: &Path) -> Result<Samples> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;
    let samples =
        parse_samples(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    info!(path = %path.display(), n = samples.len(), "samples loaded");
    Ok(samples)
}

/// Parses one- or two-column numeric text.
///
/// Columns are separated by whitespace, commas or semicolons. Blank lines and
/// everything after `#` are ignored. A first row that does not parse as
/// numbers is treated as a header.
pub fn parse_samples(text: &str) -> Result<Samples> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut n_cols = None;
    let mut first_row = true;

    for (lineno, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        let parsed: Result<Vec<f64>, _> = fields.iter().map(|f| f.parse::<f64>()).collect();
        let is_first_row = std::mem::replace(&mut first_row, false);
        let row = match parsed {
            Ok(row) => row,
            Err(_) if is_first_row => {
                debug!(line = lineno, "skipping header row");
                continue;
            }
            Err(e) => bail!("line {lineno}: {e}"),
        };

        if row.is_empty() || row.len() > 2 {
            bail!("line {lineno}: expected 1 or 2 columns, got {}", row.len());
        }
        match n_cols {
            None => n_cols = Some(row.len()),
            Some(n) if n != row.len() => {
                bail!("line {lineno}: expected {n} columns, got {}", row.len())
            }
            Some(_) => {}
        }

        if row.len() == 1 {
            x.push(y.len() as f64);
            y.push(row[0]);
        } else {
            x.push(row[0]);
            y.push(row[1]);
        }
    }

    if y.is_empty() {
        bail!("no samples found");
    }
    Ok(Samples { x, y })
}
