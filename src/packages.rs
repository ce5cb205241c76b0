use crate::dispatch::Package;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Packages processed when no input file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read packages from a JSON file shaped like
/// `[["SWM", [720, 1, 80, 25, 40]], ["RUN", [15000, 1, 75]]]`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?;
    let packages = parse_packages(&text)
        .with_context(|| format!("parsing packages: {}", path.display()))?;
    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}

pub fn parse_packages(text: &str) -> Result<Vec<Package>> {
    let raw: Vec<(String, Vec<f64>)> =
        serde_json::from_str(text).context("expected a list of [code, [numbers...]] pairs")?;
    Ok(raw
        .into_iter()
        .map(|(code, data)| Package { code, data })
        .collect())
}
