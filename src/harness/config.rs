use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::convolve::RescaleMode;
use crate::kernel::KernelName;

/// Configuration for the `ferrite-conv` binary, read from a JSON file.
///
/// Every section has defaults, so `{}` is a valid config: it convolves a
/// seeded random image with the whole bank and writes nothing to disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvolveToolConfig {
    /// Image to load. When absent, `synthetic` describes a generated one.
    pub input: Option<PathBuf>,
    pub synthetic: SyntheticConfig,
    /// Kernels to apply, in order. Empty means the whole bank.
    pub kernels: Vec<KernelName>,
    pub rescale: RescaleMode,
    /// Use the row-parallel scan.
    pub parallel: bool,
    pub output: OutputConfig,
}

impl Default for ConvolveToolConfig {
    fn default() -> Self {
        Self {
            input: None,
            synthetic: SyntheticConfig::default(),
            kernels: Vec::new(),
            rescale: RescaleMode::default(),
            parallel: false,
            output: OutputConfig::default(),
        }
    }
}

impl ConvolveToolConfig {
    /// The kernels to run, falling back to the full bank.
    pub fn kernel_names(&self) -> Vec<KernelName> {
        if self.kernels.is_empty() {
            KernelName::all().to_vec()
        } else {
            self.kernels.clone()
        }
    }
}

/// Seeded uniform-noise image used when no `input` is given.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one `<kernel>.png` per kernel, plus `original.png`.
    pub dir: Option<PathBuf>,
    /// Where to write the JSON run report.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ConvolveToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<ConvolveToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
