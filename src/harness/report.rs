use serde::Serialize;

use crate::convolve::RescaleMode;
use crate::kernel::KernelName;
use crate::reference::ReferenceDiff;

/// Outcome of one harness run, written as JSON when configured.
#[derive(Debug, Clone, Serialize)]
pub struct BankReport {
    pub width: usize,
    pub height: usize,
    pub rescale: RescaleMode,
    pub parallel: bool,
    pub kernels: Vec<KernelReport>,
}

/// Per-kernel result. Exactly one of `output_stats` and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct KernelReport {
    pub kernel: KernelName,
    pub size: usize,
    pub elapsed_ms: f64,
    pub output_stats: Option<IntensityStats>,
    /// Agreement with `image::imageops::filter3x3`, when comparable.
    pub reference: Option<ReferenceDiff>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntensityStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl IntensityStats {
    pub fn of(samples: &[u8]) -> Option<IntensityStats> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let total: u64 = samples.iter().map(|&v| v as u64).sum();
        Some(IntensityStats {
            min,
            max,
            mean: total as f64 / samples.len() as f64,
        })
    }
}
